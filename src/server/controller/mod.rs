//! HTTP request handlers.
//!
//! One module per resource. Handlers check access with the `Authorized` extractor,
//! validate payloads into params, call `ClinicService` or `UserService` and convert the
//! returned domain models to DTOs.

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod root;
pub mod specialty;
pub mod user;
pub mod vet;
pub mod visit;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Turns an empty list result into a 404.
fn non_empty<T>(items: Vec<T>, what: &str) -> Result<Vec<T>, AppError> {
    if items.is_empty() {
        Err(AppError::NotFound(format!("No {} found", what)))
    } else {
        Ok(items)
    }
}
