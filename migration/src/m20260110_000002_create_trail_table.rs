use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_national_park_table::NationalPark;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trail::Table)
                    .if_not_exists()
                    .col(pk_auto(Trail::Id))
                    .col(string_uniq(Trail::Name))
                    .col(double(Trail::Distance))
                    .col(double(Trail::Elevation))
                    .col(string(Trail::Difficulty))
                    .col(
                        timestamp(Trail::Created)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Trail::NationalParkId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_national_park_id")
                            .from(Trail::Table, Trail::NationalParkId)
                            .to(NationalPark::Table, NationalPark::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trail {
    Table,
    Id,
    Name,
    Distance,
    Elevation,
    Difficulty,
    Created,
    NationalParkId,
}
