//! Clinic facade over the repositories.
//!
//! `ClinicService` exposes every domain-shaped operation the controllers need, such as
//! `find_owner_by_id` or `save_pet`. Most operations forward to a single repository.
//! The few that do more resolve references between resources: they check that ids named
//! in a payload exist, and that a pet belongs to the owner named in a nested route.
//!
//! The operations are grouped by resource into the submodules, each adding an `impl`
//! block to `ClinicService`.

mod owner;
mod pet;
mod pet_type;
mod specialty;
mod vet;
mod visit;

use sea_orm::DatabaseConnection;

use crate::server::error::validation::ValidationError;

pub struct ClinicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClinicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds the validation error for a payload field naming an id that does not exist.
fn unknown_reference(object_name: &str, field_name: &str, id: i32, what: &str) -> ValidationError {
    ValidationError::field(
        object_name,
        field_name,
        Some(id.to_string()),
        format!("{} with id {} does not exist", what, id),
    )
}

#[cfg(test)]
mod test;
