//! Pet domain model and parameters.
//!
//! A pet is always loaded together with its pet type and its visits, so the domain model
//! is a complete representation of what the API returns for a pet.

use chrono::NaiveDate;

use crate::{
    model::pet::{PetDto, PetFieldsDto, PetTypeRefDto},
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        model::{pet_type::PetType, visit::Visit},
        util::validate::Validator,
    },
};

/// Pet with its type and visit history.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
    /// Owner of the pet, `None` for pets created without one
    pub owner_id: Option<i32>,
    /// Visits in ascending id order
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Converts a pet entity and its loaded relations to the pet domain model.
    ///
    /// # Arguments
    /// - `entity` - The pet entity model from the database
    /// - `pet_type` - The pet type loaded alongside the pet
    /// - `visits` - The visits of the pet
    ///
    /// # Returns
    /// - `Ok(Pet)` - The converted pet domain model
    /// - `Err(AppError::InternalErr(MissingPetType))` - The pet type was not loaded
    pub fn from_entity(
        entity: entity::pet::Model,
        pet_type: Option<entity::pet_type::Model>,
        visits: Vec<Visit>,
    ) -> Result<Self, AppError> {
        let Some(pet_type) = pet_type else {
            return Err(InternalError::MissingPetType {
                pet_id: entity.id,
                type_id: entity.type_id,
            }
            .into());
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            birth_date: entity.birth_date,
            pet_type: PetType::from_entity(pet_type),
            owner_id: entity.owner_id,
            visits,
        })
    }

    pub fn into_dto(self) -> PetDto {
        PetDto {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
            pet_type: self.pet_type.into_dto(),
            owner_id: self.owner_id,
            visits: self.visits.into_iter().map(Visit::into_dto).collect(),
        }
    }
}

/// Parameters for creating a pet.
#[derive(Debug, Clone)]
pub struct CreatePetParam {
    pub name: String,
    pub birth_date: NaiveDate,
    pub type_id: i32,
    pub owner_id: Option<i32>,
}

impl CreatePetParam {
    /// Validates a pet payload including its optional `ownerId`.
    ///
    /// Existence of the referenced pet type and owner is checked by the service.
    ///
    /// # Returns
    /// - `Ok(CreatePetParam)` - All fields present and within bounds
    /// - `Err(ValidationError)` - Every rejected field
    pub fn from_dto(dto: PetFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("pet");
        let (name, birth_date, type_id) = validate_fields(&mut v, dto.name, dto.birth_date, dto.pet_type);
        v.finish()?;

        Ok(Self {
            name,
            birth_date,
            type_id,
            owner_id: dto.owner_id,
        })
    }

    /// Validates a pet payload for the given owner. Any `ownerId` in the body is ignored.
    pub fn for_owner(owner_id: i32, dto: PetFieldsDto) -> Result<Self, ValidationError> {
        let mut param = Self::from_dto(dto)?;
        param.owner_id = Some(owner_id);

        Ok(param)
    }
}

/// Parameters for replacing a pet's name, birth date and type.
///
/// The owner of a pet is fixed at creation.
#[derive(Debug, Clone)]
pub struct UpdatePetParam {
    pub name: String,
    pub birth_date: NaiveDate,
    pub type_id: i32,
}

impl UpdatePetParam {
    pub fn from_dto(dto: PetFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("pet");
        let (name, birth_date, type_id) = validate_fields(&mut v, dto.name, dto.birth_date, dto.pet_type);
        v.finish()?;

        Ok(Self {
            name,
            birth_date,
            type_id,
        })
    }
}

fn validate_fields(
    v: &mut Validator,
    name: Option<String>,
    birth_date: Option<NaiveDate>,
    pet_type: Option<PetTypeRefDto>,
) -> (String, NaiveDate, i32) {
    let name = v.text("name", name, 30);
    let birth_date = v.required("birthDate", birth_date);
    let type_id = v.required("type", pet_type.and_then(|t| t.id));

    (name, birth_date, type_id)
}
