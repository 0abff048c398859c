//! Pet factory for creating test pet entities.
//!
//! Pets always reference a pet type and optionally an owner; both must already exist.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pet::PetFactory;
///
/// let pet = PetFactory::new(&db, pet_type.id)
///     .owner_id(owner.id)
///     .name("Rosy")
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    birth_date: NaiveDate,
    type_id: i32,
    owner_id: Option<i32>,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"`
    /// - birth_date: `2020-01-01`
    /// - owner_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `type_id` - ID of an existing pet type
    pub fn new(db: &'a DatabaseConnection, type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pet {}", id),
            birth_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            type_id,
            owner_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Builds and inserts the pet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pet::Model)` - Created pet entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown type or owner)
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            birth_date: ActiveValue::Set(self.birth_date),
            type_id: ActiveValue::Set(self.type_id),
            owner_id: ActiveValue::Set(self.owner_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet of the given type, optionally owned by `owner_id`.
pub async fn create_pet(
    db: &DatabaseConnection,
    type_id: i32,
    owner_id: Option<i32>,
) -> Result<entity::pet::Model, DbErr> {
    let factory = PetFactory::new(db, type_id);
    match owner_id {
        Some(owner_id) => factory.owner_id(owner_id).build().await,
        None => factory.build().await,
    }
}
