use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "national_park")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub state: String,
    pub established: DateTimeUtc,
    pub created: DateTimeUtc,
    #[sea_orm(column_type = "Blob", nullable)]
    pub picture: Option<Vec<u8>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trail::Entity")]
    Trail,
}

impl Related<super::trail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
