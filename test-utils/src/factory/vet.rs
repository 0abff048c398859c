//! Vet factory for creating test vet entities and their specialty links.

use crate::factory::helpers::{alpha_suffix, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vets.
///
/// Specialty IDs added through `specialty()` must already exist; the join rows are
/// inserted after the vet itself.
pub struct VetFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    specialty_ids: Vec<i32>,
}

impl<'a> VetFactory<'a> {
    /// Creates a new VetFactory named `"Vet Test{suffix}"` with no specialties.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Vet".to_string(),
            last_name: format!("Test{}", alpha_suffix(id)),
            specialty_ids: Vec::new(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn specialty(mut self, specialty_id: i32) -> Self {
        self.specialty_ids.push(specialty_id);
        self
    }

    /// Builds and inserts the vet and its specialty links.
    pub async fn build(self) -> Result<entity::vet::Model, DbErr> {
        let vet = entity::vet::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
        }
        .insert(self.db)
        .await?;

        for specialty_id in self.specialty_ids {
            entity::vet_specialty::ActiveModel {
                vet_id: ActiveValue::Set(vet.id),
                specialty_id: ActiveValue::Set(specialty_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(vet)
    }
}

/// Creates a vet with default values and no specialties.
pub async fn create_vet(db: &DatabaseConnection) -> Result<entity::vet::Model, DbErr> {
    VetFactory::new(db).build().await
}
