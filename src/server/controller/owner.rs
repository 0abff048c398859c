use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        owner::{OwnerDto, OwnerFieldsDto},
        pet::{PetDto, PetFieldsDto},
        visit::{VisitDto, VisitFieldsDto},
    },
    server::{
        controller::non_empty,
        error::AppError,
        middleware::auth::{Authorized, OwnerAdmin},
        model::{
            owner::{Owner, OwnerParam},
            pet::{CreatePetParam, UpdatePetParam},
            visit::CreateVisitParam,
        },
        service::clinic::ClinicService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OwnerSearchParams {
    /// Prefix of the owners' last name
    pub last_name: Option<String>,
}

/// List owners, optionally filtered by last name.
///
/// Owners whose last name starts with `lastName` are returned in id order. Without the
/// parameter every owner is returned.
///
/// # Access Control
/// - `OwnerAdmin`
///
/// # Returns
/// - `200 OK` - Owners with their pets and visits
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `403 Forbidden` - User lacks the owner admin role
/// - `404 Not Found` - No owner matched
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = OWNER_TAG,
    params(OwnerSearchParams),
    responses(
        (status = 200, description = "Owners found", body = Vec<OwnerDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "No owner matched", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn list_owners(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    Query(params): Query<OwnerSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClinicService::new(&state.db);

    let owners = match params.last_name {
        Some(last_name) => service.find_owners_by_last_name(&last_name).await?,
        None => service.find_all_owners().await?,
    };

    let owners = non_empty(owners, "owners")?;

    Ok((
        StatusCode::OK,
        Json(owners.into_iter().map(Owner::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create an owner.
///
/// # Access Control
/// - `OwnerAdmin`
///
/// # Returns
/// - `201 Created` - The created owner, with its URL in `Location`
/// - `400 Bad Request` - Invalid owner fields
/// - `401 Unauthorized` / `403 Forbidden` - Access denied
#[utoipa::path(
    post,
    path = "/api/owners",
    tag = OWNER_TAG,
    request_body = OwnerFieldsDto,
    responses(
        (status = 201, description = "Owner created", body = OwnerDto),
        (status = 400, description = "Invalid owner fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_owner(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<OwnerFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = OwnerParam::from_dto(payload)?;

    let owner = ClinicService::new(&state.db).save_owner(param).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/owners/{}", owner.id))],
        Json(owner.into_dto()),
    ))
}

/// Get an owner by id, including pets and visits.
#[utoipa::path(
    get,
    path = "/api/owners/{owner_id}",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Owner found", body = OwnerDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_owner(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = ClinicService::new(&state.db)
        .find_owner_by_id(owner_id)
        .await?
        .ok_or_else(|| owner_not_found(owner_id))?;

    Ok((StatusCode::OK, Json(owner.into_dto())))
}

/// Replace an owner's contact details.
///
/// The id in the path identifies the owner; pets are not touched.
#[utoipa::path(
    put,
    path = "/api/owners/{owner_id}",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    request_body = OwnerFieldsDto,
    responses(
        (status = 204, description = "Owner updated"),
        (status = 400, description = "Invalid owner fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_owner(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<OwnerFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = OwnerParam::from_dto(payload)?;

    ClinicService::new(&state.db)
        .update_owner(owner_id, param)
        .await?
        .ok_or_else(|| owner_not_found(owner_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an owner with their pets and visits.
///
/// Deleting an owner that does not exist also succeeds.
#[utoipa::path(
    delete,
    path = "/api/owners/{owner_id}",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 204, description = "Owner deleted or absent"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_owner(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ClinicService::new(&state.db).delete_owner(owner_id).await? {
        tracing::debug!("Owner {} was already absent", owner_id);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Add a pet to an owner.
///
/// Any `ownerId` in the body is ignored in favour of the path.
///
/// # Returns
/// - `201 Created` - The created pet, with its URL in `Location`
/// - `400 Bad Request` - Invalid pet fields or unknown pet type
/// - `404 Not Found` - Owner not found
#[utoipa::path(
    post,
    path = "/api/owners/{owner_id}/pets",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    request_body = PetFieldsDto,
    responses(
        (status = 201, description = "Pet created", body = PetDto),
        (status = 400, description = "Invalid pet fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_pet_to_owner(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PetFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePetParam::for_owner(owner_id, payload)?;

    let pet = ClinicService::new(&state.db)
        .add_pet_to_owner(owner_id, param)
        .await?
        .ok_or_else(|| owner_not_found(owner_id))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/pets/{}", pet.id))],
        Json(pet.into_dto()),
    ))
}

/// Get a pet of an owner.
#[utoipa::path(
    get,
    path = "/api/owners/{owner_id}/pets/{pet_id}",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID"),
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet found", body = PetDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Owner not found or pet not owned by them", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_owner_pet(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath((owner_id, pet_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let pet = ClinicService::new(&state.db)
        .find_owner_pet(owner_id, pet_id)
        .await?
        .ok_or_else(|| owner_pet_not_found(owner_id, pet_id))?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// Replace a pet of an owner.
#[utoipa::path(
    put,
    path = "/api/owners/{owner_id}/pets/{pet_id}",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID"),
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    request_body = PetFieldsDto,
    responses(
        (status = 204, description = "Pet updated"),
        (status = 400, description = "Invalid pet fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Owner not found or pet not owned by them", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_owner_pet(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath((owner_id, pet_id)): ApiPath<(i32, i32)>,
    ApiJson(payload): ApiJson<PetFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePetParam::from_dto(payload)?;

    ClinicService::new(&state.db)
        .update_owner_pet(owner_id, pet_id, param)
        .await?
        .ok_or_else(|| owner_pet_not_found(owner_id, pet_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a visit to a pet of an owner.
///
/// Any `petId` in the body is ignored in favour of the path. The date defaults to today.
#[utoipa::path(
    post,
    path = "/api/owners/{owner_id}/pets/{pet_id}/visits",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID"),
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    request_body = VisitFieldsDto,
    responses(
        (status = 201, description = "Visit created", body = VisitDto),
        (status = 400, description = "Invalid visit fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Owner not found or pet not owned by them", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_visit_to_owner(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath((owner_id, pet_id)): ApiPath<(i32, i32)>,
    ApiJson(payload): ApiJson<VisitFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateVisitParam::for_pet(pet_id, payload)?;

    let visit = ClinicService::new(&state.db)
        .add_visit_to_owner_pet(owner_id, param)
        .await?
        .ok_or_else(|| owner_pet_not_found(owner_id, pet_id))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/visits/{}", visit.id))],
        Json(visit.into_dto()),
    ))
}

fn owner_not_found(owner_id: i32) -> AppError {
    AppError::NotFound(format!("Owner {} not found", owner_id))
}

fn owner_pet_not_found(owner_id: i32, pet_id: i32) -> AppError {
    AppError::NotFound(format!("Pet {} not found for owner {}", pet_id, owner_id))
}
