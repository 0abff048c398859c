//! Specialty domain model and parameters.

use crate::{
    model::specialty::{SpecialtyDto, SpecialtyFieldsDto},
    server::{error::validation::ValidationError, util::validate::Validator},
};

/// Area of veterinary expertise, such as `radiology`.
#[derive(Debug, Clone, PartialEq)]
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

impl Specialty {
    pub fn from_entity(entity: entity::specialty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SpecialtyDto {
        SpecialtyDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating or replacing a specialty.
#[derive(Debug, Clone)]
pub struct SpecialtyParam {
    pub name: String,
}

impl SpecialtyParam {
    pub fn from_dto(dto: SpecialtyFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("specialty");
        let name = v.text("name", dto.name, 80);
        v.finish()?;

        Ok(Self { name })
    }
}
