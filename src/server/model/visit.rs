//! Visit domain model and parameters.
//!
//! A visit records one appointment of a pet. Creating a visit needs the pet it belongs
//! to, either from the request body (`/api/visits`) or from the nested owner/pet route.
//! Updates never move a visit to another pet.

use chrono::{NaiveDate, Utc};

use crate::{
    model::visit::{VisitDto, VisitFieldsDto},
    server::{error::validation::ValidationError, util::validate::Validator},
};

/// Appointment of a pet on a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: i32,
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: i32,
}

impl Visit {
    pub fn from_entity(entity: entity::visit::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.visit_date,
            description: entity.description,
            pet_id: entity.pet_id,
        }
    }

    pub fn into_dto(self) -> VisitDto {
        VisitDto {
            id: self.id,
            date: self.date,
            description: self.description,
            pet_id: self.pet_id,
        }
    }
}

/// Parameters for creating a visit.
#[derive(Debug, Clone)]
pub struct CreateVisitParam {
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: i32,
}

impl CreateVisitParam {
    /// Validates a payload submitted to `/api/visits`, where `petId` is required.
    ///
    /// # Returns
    /// - `Ok(CreateVisitParam)` - Valid description and pet id, date defaulted to today
    /// - `Err(ValidationError)` - Every rejected field
    pub fn from_dto(dto: VisitFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("visit");
        let description = v.text("description", dto.description, 255);
        let pet_id = v.required("petId", dto.pet_id);
        v.finish()?;

        Ok(Self {
            date: dto.date.unwrap_or_else(today),
            description,
            pet_id,
        })
    }

    /// Validates a payload for the given pet. Any `petId` in the body is ignored.
    pub fn for_pet(pet_id: i32, dto: VisitFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("visit");
        let description = v.text("description", dto.description, 255);
        v.finish()?;

        Ok(Self {
            date: dto.date.unwrap_or_else(today),
            description,
            pet_id,
        })
    }
}

/// Parameters for replacing the date and description of a visit.
#[derive(Debug, Clone)]
pub struct UpdateVisitParam {
    pub date: NaiveDate,
    pub description: String,
}

impl UpdateVisitParam {
    pub fn from_dto(dto: VisitFieldsDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("visit");
        let description = v.text("description", dto.description, 255);
        v.finish()?;

        Ok(Self {
            date: dto.date.unwrap_or_else(today),
            description,
        })
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
