//! Owner domain model and parameters.

use crate::{
    model::owner::{OwnerDto, OwnerFieldsDto},
    server::{error::validation::ValidationError, model::pet::Pet, util::validate::Validator},
};

/// Pet owner with contact details and their pets.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Converts an owner entity and its loaded pets to the owner domain model.
    ///
    /// # Arguments
    /// - `entity` - The owner entity model from the database
    /// - `pets` - The pets of the owner, each with type and visits
    ///
    /// # Returns
    /// - `Owner` - The converted owner domain model
    pub fn from_entity(entity: entity::owner::Model, pets: Vec<Pet>) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address: entity.address,
            city: entity.city,
            telephone: entity.telephone,
            pets,
        }
    }

    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            telephone: self.telephone,
            pets: self.pets.into_iter().map(Pet::into_dto).collect(),
        }
    }
}

/// Parameters for creating or replacing an owner.
///
/// Replacing an owner only touches the contact fields, the owner's pets are kept.
#[derive(Debug, Clone)]
pub struct OwnerParam {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerParam {
    /// Validates the request payload.
    ///
    /// # Returns
    /// - `Ok(OwnerParam)` - All fields present and valid
    /// - `Err(ValidationError)` - Every rejected field
    pub fn from_dto(dto: OwnerFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("owner");
        let first_name = v.person_name("firstName", dto.first_name, 30);
        let last_name = v.person_name("lastName", dto.last_name, 30);
        let address = v.text("address", dto.address, 255);
        let city = v.text("city", dto.city, 80);
        let telephone = v.digits("telephone", dto.telephone, 20);
        v.finish()?;

        Ok(Self {
            first_name,
            last_name,
            address,
            city,
            telephone,
        })
    }
}
