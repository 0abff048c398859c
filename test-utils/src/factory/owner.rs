//! Owner factory for creating test owner entities.

use crate::factory::helpers::{alpha_suffix, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test owners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::owner::OwnerFactory;
///
/// let owner = OwnerFactory::new(&db)
///     .first_name("Harold")
///     .last_name("Davis")
///     .build()
///     .await?;
/// ```
pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

impl<'a> OwnerFactory<'a> {
    /// Creates a new OwnerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Owner"`
    /// - last_name: `"Test{suffix}"` where suffix is a unique letter sequence
    /// - address: `"{id} Main St."`
    /// - city: `"Madison"`
    /// - telephone: `"608555{id}"` truncated to 10 digits
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut telephone = format!("608555{:04}", id);
        telephone.truncate(10);
        Self {
            db,
            first_name: "Owner".to_string(),
            last_name: format!("Test{}", alpha_suffix(id)),
            address: format!("{} Main St.", id),
            city: "Madison".to_string(),
            telephone,
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

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    /// Builds and inserts the owner entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::owner::Model)` - Created owner entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            telephone: ActiveValue::Set(self.telephone),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner with default values.
///
/// Shorthand for `OwnerFactory::new(db).build().await`.
pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db).build().await
}

/// Creates an owner with the given first and last name.
pub async fn create_owner_named(
    db: &DatabaseConnection,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db)
        .first_name(first_name)
        .last_name(last_name)
        .build()
        .await
}
