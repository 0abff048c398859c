use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pet_type::{PetTypeDto, PetTypeFieldsDto},
    },
    server::{
        controller::non_empty,
        error::AppError,
        middleware::auth::{Authorized, OwnerOrVetAdmin, VetAdmin},
        model::pet_type::{PetType, PetTypeParam},
        service::clinic::ClinicService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping pet type endpoints in OpenAPI documentation
pub static PET_TYPE_TAG: &str = "pettype";

/// List every pet type.
///
/// Readable by owner admins as well as vet admins, since pet forms need the types.
#[utoipa::path(
    get,
    path = "/api/pettypes",
    tag = PET_TYPE_TAG,
    responses(
        (status = 200, description = "Pet types found", body = Vec<PetTypeDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner or vet admin role required", body = ErrorDto),
        (status = 404, description = "No pet type exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn list_pet_types(
    _: Authorized<OwnerOrVetAdmin>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let pet_types = non_empty(
        ClinicService::new(&state.db).find_all_pet_types().await?,
        "pet types",
    )?;

    Ok((
        StatusCode::OK,
        Json(pet_types.into_iter().map(PetType::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/pettypes",
    tag = PET_TYPE_TAG,
    request_body = PetTypeFieldsDto,
    responses(
        (status = 201, description = "Pet type created", body = PetTypeDto),
        (status = 400, description = "Invalid pet type fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_pet_type(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PetTypeFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = PetTypeParam::from_dto(payload)?;

    let pet_type = ClinicService::new(&state.db).save_pet_type(param).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/pettypes/{}", pet_type.id))],
        Json(pet_type.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/pettypes/{pet_type_id}",
    tag = PET_TYPE_TAG,
    params(
        ("pet_type_id" = i32, Path, description = "Pet type ID")
    ),
    responses(
        (status = 200, description = "Pet type found", body = PetTypeDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner or vet admin role required", body = ErrorDto),
        (status = 404, description = "Pet type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_pet_type(
    _: Authorized<OwnerOrVetAdmin>,
    State(state): State<AppState>,
    ApiPath(pet_type_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pet_type = ClinicService::new(&state.db)
        .find_pet_type_by_id(pet_type_id)
        .await?
        .ok_or_else(|| pet_type_not_found(pet_type_id))?;

    Ok((StatusCode::OK, Json(pet_type.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/pettypes/{pet_type_id}",
    tag = PET_TYPE_TAG,
    params(
        ("pet_type_id" = i32, Path, description = "Pet type ID")
    ),
    request_body = PetTypeFieldsDto,
    responses(
        (status = 204, description = "Pet type updated"),
        (status = 400, description = "Invalid pet type fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Pet type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_pet_type(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(pet_type_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PetTypeFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = PetTypeParam::from_dto(payload)?;

    ClinicService::new(&state.db)
        .update_pet_type(pet_type_id, param)
        .await?
        .ok_or_else(|| pet_type_not_found(pet_type_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a pet type.
///
/// Fails with a server error while pets of this type still exist.
#[utoipa::path(
    delete,
    path = "/api/pettypes/{pet_type_id}",
    tag = PET_TYPE_TAG,
    params(
        ("pet_type_id" = i32, Path, description = "Pet type ID")
    ),
    responses(
        (status = 204, description = "Pet type deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Vet admin role required", body = ErrorDto),
        (status = 404, description = "Pet type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_pet_type(
    _: Authorized<VetAdmin>,
    State(state): State<AppState>,
    ApiPath(pet_type_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ClinicService::new(&state.db).delete_pet_type(pet_type_id).await? {
        return Err(pet_type_not_found(pet_type_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn pet_type_not_found(pet_type_id: i32) -> AppError {
    AppError::NotFound(format!("Pet type {} not found", pet_type_id))
}
