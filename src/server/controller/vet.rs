use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vet::{VetDto, VetFieldsDto},
    },
    server::{
        controller::non_empty,
        error::AppError,
        middleware::auth::{Authorized, VetAdmin},
        model::vet::{Vet, VetParam},
        service::clinic::ClinicService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping vet endpoints in OpenAPI documentation
pub static VET_TAG: &str = "vet";

/// List every vet with their specialties.
///
/// # Access Control
/// - `VetAdmin`
///
/// # Returns
/// - `200 OK` - Vets in id order, specialties sorted by name
/// - `404 Not Found` - No vet exists
#[utoipa::path(
    get,
    path = "/api/vets",
    tag = VET_TAG,
    responses(
        (status = 200, description = "Vets found", body = Vec<VetDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "No vet exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn list_vets(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vets = non_empty(ClinicService::new(&state.db).find_all_vets().await?, "vets")?;

    Ok((
        StatusCode::OK,
        Json(vets.into_iter().map(Vet::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a vet linked to existing specialties.
///
/// Specialties are referenced by id; names in the body are ignored.
///
/// # Returns
/// - `201 Created` - The created vet, with its URL in `Location`
/// - `400 Bad Request` - Invalid names or unknown specialty ids
#[utoipa::path(
    post,
    path = "/api/vets",
    tag = VET_TAG,
    request_body = VetFieldsDto,
    responses(
        (status = 201, description = "Vet created", body = VetDto),
        (status = 400, description = "Invalid vet fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_vet(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<VetFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = VetParam::from_dto(payload)?;

    let vet = ClinicService::new(&state.db).save_vet(param).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/vets/{}", vet.id))],
        Json(vet.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/vets/{vet_id}",
    tag = VET_TAG,
    params(
        ("vet_id" = i32, Path, description = "Vet ID")
    ),
    responses(
        (status = 200, description = "Vet found", body = VetDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Vet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_vet(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(vet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let vet = ClinicService::new(&state.db)
        .find_vet_by_id(vet_id)
        .await?
        .ok_or_else(|| vet_not_found(vet_id))?;

    Ok((StatusCode::OK, Json(vet.into_dto())))
}

/// Replace a vet's names and specialty links.
#[utoipa::path(
    put,
    path = "/api/vets/{vet_id}",
    tag = VET_TAG,
    params(
        ("vet_id" = i32, Path, description = "Vet ID")
    ),
    request_body = VetFieldsDto,
    responses(
        (status = 204, description = "Vet updated"),
        (status = 400, description = "Invalid vet fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Vet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_vet(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(vet_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<VetFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = VetParam::from_dto(payload)?;

    ClinicService::new(&state.db)
        .update_vet(vet_id, param)
        .await?
        .ok_or_else(|| vet_not_found(vet_id))?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/vets/{vet_id}",
    tag = VET_TAG,
    params(
        ("vet_id" = i32, Path, description = "Vet ID")
    ),
    responses(
        (status = 204, description = "Vet deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Vet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_vet(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(vet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ClinicService::new(&state.db).delete_vet(vet_id).await? {
        return Err(vet_not_found(vet_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn vet_not_found(vet_id: i32) -> AppError {
    AppError::NotFound(format!("Vet {} not found", vet_id))
}
