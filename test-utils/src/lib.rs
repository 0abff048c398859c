//! Pet Clinic Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the pet
//! clinic backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders inserting entities with sensible defaults
//! - **fixture**: In-memory entity models for tests that never touch the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Owner;
//!
//! #[tokio::test]
//! async fn test_owner_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Owner)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
