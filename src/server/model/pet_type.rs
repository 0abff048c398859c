//! Pet type domain model and parameters.

use crate::{
    model::pet_type::{PetTypeDto, PetTypeFieldsDto},
    server::{error::validation::ValidationError, util::validate::Validator},
};

/// Kind of animal a pet can be, such as `cat` or `dog`.
#[derive(Debug, Clone, PartialEq)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

impl PetType {
    pub fn from_entity(entity: entity::pet_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> PetTypeDto {
        PetTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating or replacing a pet type.
#[derive(Debug, Clone)]
pub struct PetTypeParam {
    pub name: String,
}

impl PetTypeParam {
    /// Validates the request payload.
    ///
    /// # Returns
    /// - `Ok(PetTypeParam)` - Name present and at most 80 characters
    /// - `Err(ValidationError)` - Name missing, blank or too long
    pub fn from_dto(dto: PetTypeFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("petType");
        let name = v.text("name", dto.name, 80);
        v.finish()?;

        Ok(Self { name })
    }
}
