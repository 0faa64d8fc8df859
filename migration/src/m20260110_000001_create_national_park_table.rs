use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NationalPark::Table)
                    .if_not_exists()
                    .col(pk_auto(NationalPark::Id))
                    .col(string_uniq(NationalPark::Name))
                    .col(string(NationalPark::State))
                    .col(timestamp(NationalPark::Established))
                    .col(
                        timestamp(NationalPark::Created)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(blob_null(NationalPark::Picture))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NationalPark::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NationalPark {
    Table,
    Id,
    Name,
    State,
    Established,
    Created,
    Picture,
}
