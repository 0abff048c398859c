use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::specialty::SpecialtyDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<SpecialtyDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SpecialtyRefDto {
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetFieldsDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialties: Option<Vec<SpecialtyRefDto>>,
}
