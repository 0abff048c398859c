use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A pet row references a pet type that could not be loaded alongside it
    ///
    /// The foreign key makes this unreachable with an intact schema. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Pet {pet_id} references pet type {type_id} which was not found")]
    MissingPetType {
        /// The pet whose type could not be resolved
        pet_id: i32,
        /// The dangling pet type id
        type_id: i32,
    },

    /// A row written in the current request could not be read back
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{entity} {id} was not found directly after being written")]
    MissingAfterWrite {
        /// Name of the entity that was written
        entity: &'static str,
        /// Primary key of the written row
        id: String,
    },
}
