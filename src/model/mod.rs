//! Wire-level DTOs exchanged with API clients.
//!
//! Response DTOs carry the full resource representation. Request DTOs (`*FieldsDto`)
//! keep every field optional so that missing or `null` values reach validation and
//! are reported as field errors instead of being rejected by the JSON extractor.

pub mod api;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod user;
pub mod vet;
pub mod visit;
