//! Vet domain model and parameters.

use crate::{
    model::vet::{VetDto, VetFieldsDto},
    server::{
        error::validation::ValidationError, model::specialty::Specialty,
        util::validate::Validator,
    },
};

/// Veterinarian with their specialties.
#[derive(Debug, Clone, PartialEq)]
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Specialties ordered by name
    pub specialties: Vec<Specialty>,
}

impl Vet {
    pub fn from_entity(
        entity: entity::vet::Model,
        specialties: Vec<entity::specialty::Model>,
    ) -> Self {
        let mut specialties: Vec<Specialty> =
            specialties.into_iter().map(Specialty::from_entity).collect();
        specialties.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            specialties,
        }
    }

    pub fn into_dto(self) -> VetDto {
        VetDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            specialties: self.specialties.into_iter().map(Specialty::into_dto).collect(),
        }
    }
}

/// Parameters for creating or replacing a vet and their specialty links.
#[derive(Debug, Clone)]
pub struct VetParam {
    pub first_name: String,
    pub last_name: String,
    /// Distinct specialty ids in submission order
    pub specialty_ids: Vec<i32>,
}

impl VetParam {
    /// Validates the request payload.
    ///
    /// Specialty references must carry an id. Repeated ids collapse into one link.
    /// Existence of the referenced specialties is checked by the service.
    pub fn from_dto(dto: VetFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("vet");
        let first_name = v.text("firstName", dto.first_name, 30);
        let last_name = v.text("lastName", dto.last_name, 30);

        let mut specialty_ids = Vec::new();
        for specialty in dto.specialties.unwrap_or_default() {
            match specialty.id {
                Some(id) if !specialty_ids.contains(&id) => specialty_ids.push(id),
                Some(_) => {}
                None => v.reject("specialties", specialty.name, "specialty id must not be null"),
            }
        }
        v.finish()?;

        Ok(Self {
            first_name,
            last_name,
            specialty_ids,
        })
    }
}
