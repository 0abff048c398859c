use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{pet_type::PetTypeDto, visit::VisitDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(rename = "type")]
    pub pet_type: PetTypeDto,
    pub owner_id: Option<i32>,
    pub visits: Vec<VisitDto>,
}

/// Reference to an existing pet type inside a pet payload.
///
/// Only the id is used, a submitted name is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PetTypeRefDto {
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetFieldsDto {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeRefDto>,
    /// Only honored when creating through `/api/pets`.
    pub owner_id: Option<i32>,
}
