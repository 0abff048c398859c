//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! clinic entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs by `from_dto` constructors, which run the
//! field validation and are the only way request data reaches the service layer.

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod user;
pub mod vet;
pub mod visit;
