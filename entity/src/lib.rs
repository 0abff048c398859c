//! SeaORM entities for the pet clinic schema.
//!
//! Each module maps one table created by the `migration` crate. Relations mirror the
//! foreign keys declared there so that `Schema::create_table_from_entity` produces an
//! equivalent schema for in-memory test databases.

pub mod prelude;

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod role;
pub mod specialty;
pub mod user;
pub mod vet;
pub mod vet_specialty;
pub mod visit;
