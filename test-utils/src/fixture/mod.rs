//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! entity → domain → DTO conversions in isolation.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let owner = fixture::owner::entity();
//! assert_eq!(owner.first_name, "George");
//! ```

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod visit;

pub use owner::entity as owner_entity;
pub use pet::entity as pet_entity;
pub use pet_type::entity as pet_type_entity;
pub use visit::entity as visit_entity;
