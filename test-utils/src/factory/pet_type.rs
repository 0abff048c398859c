//! Pet type factory for creating test pet type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pet types.
pub struct PetTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> PetTypeFactory<'a> {
    /// Creates a new PetTypeFactory named `"type {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("type {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the pet type entity into the database.
    pub async fn build(self) -> Result<entity::pet_type::Model, DbErr> {
        entity::pet_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet type with default values.
pub async fn create_pet_type(db: &DatabaseConnection) -> Result<entity::pet_type::Model, DbErr> {
    PetTypeFactory::new(db).build().await
}

/// Creates a pet type with the provided name.
pub async fn create_pet_type_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::pet_type::Model, DbErr> {
    PetTypeFactory::new(db).name(name).build().await
}
