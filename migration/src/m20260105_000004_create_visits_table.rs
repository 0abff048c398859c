use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_pets_table::Pets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visits::Table)
                    .if_not_exists()
                    .col(pk_auto(Visits::Id))
                    .col(integer(Visits::PetId))
                    .col(date(Visits::VisitDate))
                    .col(string_len(Visits::Description, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visits_pet_id")
                            .from(Visits::Table, Visits::PetId)
                            .to(Pets::Table, Pets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Visits {
    Table,
    Id,
    PetId,
    VisitDate,
    Description,
}
