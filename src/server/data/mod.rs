//! Database repository layer for all clinic entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity of the clinic. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod user;
pub mod vet;
pub mod visit;

#[cfg(test)]
mod test;
