use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pet::{PetDto, PetFieldsDto},
    },
    server::{
        controller::non_empty,
        error::AppError,
        middleware::auth::{Authorized, OwnerAdmin},
        model::pet::{CreatePetParam, Pet, UpdatePetParam},
        service::clinic::ClinicService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pet";

/// List every pet with its type and visits.
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    responses(
        (status = 200, description = "Pets found", body = Vec<PetDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "No pet exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn list_pets(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let pets = non_empty(ClinicService::new(&state.db).find_all_pets().await?, "pets")?;

    Ok((
        StatusCode::OK,
        Json(pets.into_iter().map(Pet::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a pet.
///
/// `type.id` must name an existing pet type. `ownerId` is optional and, when given,
/// must name an existing owner.
///
/// # Returns
/// - `201 Created` - The created pet, with its URL in `Location`
/// - `400 Bad Request` - Invalid fields, unknown pet type or unknown owner
#[utoipa::path(
    post,
    path = "/api/pets",
    tag = PET_TAG,
    request_body = PetFieldsDto,
    responses(
        (status = 201, description = "Pet created", body = PetDto),
        (status = 400, description = "Invalid pet fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_pet(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PetFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePetParam::from_dto(payload)?;

    let pet = ClinicService::new(&state.db).save_pet(param).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/pets/{}", pet.id))],
        Json(pet.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet found", body = PetDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_pet(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pet = ClinicService::new(&state.db)
        .find_pet_by_id(pet_id)
        .await?
        .ok_or_else(|| pet_not_found(pet_id))?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// Replace a pet's name, birth date and type.
///
/// The owner of a pet cannot be changed; any `ownerId` in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    request_body = PetFieldsDto,
    responses(
        (status = 204, description = "Pet updated"),
        (status = 400, description = "Invalid pet fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_pet(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PetFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePetParam::from_dto(payload)?;

    ClinicService::new(&state.db)
        .update_pet(pet_id, param)
        .await?
        .ok_or_else(|| pet_not_found(pet_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a pet together with its visits.
#[utoipa::path(
    delete,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_pet(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ClinicService::new(&state.db).delete_pet(pet_id).await? {
        return Err(pet_not_found(pet_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn pet_not_found(pet_id: i32) -> AppError {
    AppError::NotFound(format!("Pet {} not found", pet_id))
}
