//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database; dependencies such as
//! an owner for a pet are passed in explicitly or created through `helpers`.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::owner::create_owner(&db).await?;
//!     let pet_type = factory::pet_type::create_pet_type(&db).await?;
//!
//!     // Create with all dependencies
//!     let (owner, pet_type, pet) = factory::helpers::create_pet_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let owner = factory::owner::OwnerFactory::new(&db)
//!     .first_name("Betty")
//!     .last_name("Davis")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod user;
pub mod vet;
pub mod visit;

pub use owner::create_owner;
pub use pet::create_pet;
pub use pet_type::create_pet_type;
pub use specialty::create_specialty;
pub use user::create_user;
pub use vet::create_vet;
pub use visit::create_visit;
