use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitDto {
    pub id: i32,
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitFieldsDto {
    /// Defaults to the current date when omitted.
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    /// Required by `/api/visits`, ignored by the nested owner/pet route.
    pub pet_id: Option<i32>,
}
