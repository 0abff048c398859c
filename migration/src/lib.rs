pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_owners_table;
mod m20260105_000002_create_types_table;
mod m20260105_000003_create_pets_table;
mod m20260105_000004_create_visits_table;
mod m20260105_000005_create_vets_table;
mod m20260105_000006_create_specialties_table;
mod m20260105_000007_create_vet_specialties_table;
mod m20260105_000008_create_users_table;
mod m20260105_000009_create_roles_table;
mod m20260105_000010_seed_sample_clinic;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_owners_table::Migration),
            Box::new(m20260105_000002_create_types_table::Migration),
            Box::new(m20260105_000003_create_pets_table::Migration),
            Box::new(m20260105_000004_create_visits_table::Migration),
            Box::new(m20260105_000005_create_vets_table::Migration),
            Box::new(m20260105_000006_create_specialties_table::Migration),
            Box::new(m20260105_000007_create_vet_specialties_table::Migration),
            Box::new(m20260105_000008_create_users_table::Migration),
            Box::new(m20260105_000009_create_roles_table::Migration),
            Box::new(m20260105_000010_seed_sample_clinic::Migration),
        ]
    }
}
