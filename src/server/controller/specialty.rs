use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        specialty::{SpecialtyDto, SpecialtyFieldsDto},
    },
    server::{
        controller::non_empty,
        error::AppError,
        middleware::auth::{Authorized, VetAdmin},
        model::specialty::{Specialty, SpecialtyParam},
        service::clinic::ClinicService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping specialty endpoints in OpenAPI documentation
pub static SPECIALTY_TAG: &str = "specialty";

#[utoipa::path(
    get,
    path = "/api/specialties",
    tag = SPECIALTY_TAG,
    responses(
        (status = 200, description = "Specialties found", body = Vec<SpecialtyDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "No specialty exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn list_specialties(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let specialties = non_empty(
        ClinicService::new(&state.db).find_all_specialties().await?,
        "specialties",
    )?;

    Ok((
        StatusCode::OK,
        Json(
            specialties
                .into_iter()
                .map(Specialty::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/specialties",
    tag = SPECIALTY_TAG,
    request_body = SpecialtyFieldsDto,
    responses(
        (status = 201, description = "Specialty created", body = SpecialtyDto),
        (status = 400, description = "Invalid specialty fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_specialty(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SpecialtyFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SpecialtyParam::from_dto(payload)?;

    let specialty = ClinicService::new(&state.db).save_specialty(param).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/specialties/{}", specialty.id))],
        Json(specialty.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/specialties/{specialty_id}",
    tag = SPECIALTY_TAG,
    params(
        ("specialty_id" = i32, Path, description = "Specialty ID")
    ),
    responses(
        (status = 200, description = "Specialty found", body = SpecialtyDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Specialty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_specialty(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(specialty_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let specialty = ClinicService::new(&state.db)
        .find_specialty_by_id(specialty_id)
        .await?
        .ok_or_else(|| specialty_not_found(specialty_id))?;

    Ok((StatusCode::OK, Json(specialty.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/specialties/{specialty_id}",
    tag = SPECIALTY_TAG,
    params(
        ("specialty_id" = i32, Path, description = "Specialty ID")
    ),
    request_body = SpecialtyFieldsDto,
    responses(
        (status = 204, description = "Specialty updated"),
        (status = 400, description = "Invalid specialty fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Specialty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_specialty(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(specialty_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<SpecialtyFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SpecialtyParam::from_dto(payload)?;

    ClinicService::new(&state.db)
        .update_specialty(specialty_id, param)
        .await?
        .ok_or_else(|| specialty_not_found(specialty_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a specialty and unlink it from every vet.
#[utoipa::path(
    delete,
    path = "/api/specialties/{specialty_id}",
    tag = SPECIALTY_TAG,
    params(
        ("specialty_id" = i32, Path, description = "Specialty ID")
    ),
    responses(
        (status = 204, description = "Specialty deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Specialty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_specialty(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(specialty_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ClinicService::new(&state.db)
        .delete_specialty(specialty_id)
        .await?
    {
        return Err(specialty_not_found(specialty_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn specialty_not_found(specialty_id: i32) -> AppError {
    AppError::NotFound(format!("Specialty {} not found", specialty_id))
}
