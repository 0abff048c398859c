use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        owner::OwnerParam,
        pet::{CreatePetParam, UpdatePetParam},
        vet::VetParam,
        visit::CreateVisitParam,
    },
    service::clinic::ClinicService,
};


fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 9, 7).unwrap()
}

/// Returns the `(objectName, fieldName)` pairs of a validation error.
fn rejected_fields(err: AppError) -> Vec<(String, String)> {
    match err {
        AppError::ValidationErr(err) => err
            .errors
            .into_iter()
            .map(|e| (e.object_name, e.field_name))
            .collect(),
        other => panic!("expected validation error, got {:?}", other),
    }
}
