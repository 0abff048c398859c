use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_owners_table::Owners, m20260105_000002_create_types_table::Types};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(pk_auto(Pets::Id))
                    .col(string_len(Pets::Name, 30))
                    .col(date(Pets::BirthDate))
                    .col(integer(Pets::TypeId))
                    .col(integer_null(Pets::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pets_type_id")
                            .from(Pets::Table, Pets::TypeId)
                            .to(Types::Table, Types::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pets_owner_id")
                            .from(Pets::Table, Pets::OwnerId)
                            .to(Owners::Table, Owners::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pets_name")
                    .table(Pets::Table)
                    .col(Pets::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pets {
    Table,
    Id,
    Name,
    BirthDate,
    TypeId,
    OwnerId,
}
