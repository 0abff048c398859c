use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Owner, PetType, Pet};
///
/// let test = TestBuilder::new()
///     .with_table(Owner)
///     .with_table(PetType)
///     .with_table(Pet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared by the entity's relations.
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the owner, pet type, pet and visit tables in dependency order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_owner_tables(self) -> Self {
        self.with_table(Owner)
            .with_table(PetType)
            .with_table(Pet)
            .with_table(Visit)
    }

    /// Adds the vet, specialty and vet-specialty join tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_vet_tables(self) -> Self {
        self.with_table(Vet)
            .with_table(Specialty)
            .with_table(VetSpecialty)
    }

    /// Adds the user and role tables used for authentication.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Role)
    }

    /// Adds every table of the clinic schema.
    ///
    /// Equivalent to chaining `with_owner_tables()`, `with_vet_tables()` and
    /// `with_user_tables()`. Use this for controller tests that exercise the full router.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_clinic_tables(self) -> Self {
        self.with_owner_tables()
            .with_vet_tables()
            .with_user_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
