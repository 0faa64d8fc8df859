use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: String,
    pub created: DateTimeUtc,
    pub national_park_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::national_park::Entity",
        from = "Column::NationalParkId",
        to = "super::national_park::Column::Id"
    )]
    NationalPark,
}

impl Related<super::national_park::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NationalPark.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
