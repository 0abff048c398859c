use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_vets_table::Vets,
    m20260105_000006_create_specialties_table::Specialties,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VetSpecialties::Table)
                    .if_not_exists()
                    .col(integer(VetSpecialties::VetId))
                    .col(integer(VetSpecialties::SpecialtyId))
                    .primary_key(
                        Index::create()
                            .col(VetSpecialties::VetId)
                            .col(VetSpecialties::SpecialtyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_vet_id")
                            .from(VetSpecialties::Table, VetSpecialties::VetId)
                            .to(Vets::Table, Vets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_specialty_id")
                            .from(VetSpecialties::Table, VetSpecialties::SpecialtyId)
                            .to(Specialties::Table, Specialties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VetSpecialties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VetSpecialties {
    Table,
    VetId,
    SpecialtyId,
}
