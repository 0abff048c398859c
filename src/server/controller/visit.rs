use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        visit::{VisitDto, VisitFieldsDto},
    },
    server::{
        controller::non_empty,
        error::AppError,
        middleware::auth::{Authorized, OwnerAdmin},
        model::visit::{CreateVisitParam, UpdateVisitParam, Visit},
        service::clinic::ClinicService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath},
    },
};

/// Tag for grouping visit endpoints in OpenAPI documentation
pub static VISIT_TAG: &str = "visit";

#[utoipa::path(
    get,
    path = "/api/visits",
    tag = VISIT_TAG,
    responses(
        (status = 200, description = "Visits found", body = Vec<VisitDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "No visit exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn list_visits(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let visits = non_empty(
        ClinicService::new(&state.db).find_all_visits().await?,
        "visits",
    )?;

    Ok((
        StatusCode::OK,
        Json(visits.into_iter().map(Visit::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a visit for the pet named by `petId`.
///
/// The date defaults to today when omitted.
///
/// # Returns
/// - `201 Created` - The created visit, with its URL in `Location`
/// - `400 Bad Request` - Missing description, missing `petId` or unknown pet
#[utoipa::path(
    post,
    path = "/api/visits",
    tag = VISIT_TAG,
    request_body = VisitFieldsDto,
    responses(
        (status = 201, description = "Visit created", body = VisitDto),
        (status = 400, description = "Invalid visit fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_visit(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<VisitFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateVisitParam::from_dto(payload)?;

    let visit = ClinicService::new(&state.db).save_visit(param).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/visits/{}", visit.id))],
        Json(visit.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 200, description = "Visit found", body = VisitDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_visit(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(visit_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visit = ClinicService::new(&state.db)
        .find_visit_by_id(visit_id)
        .await?
        .ok_or_else(|| visit_not_found(visit_id))?;

    Ok((StatusCode::OK, Json(visit.into_dto())))
}

/// Replace a visit's date and description.
///
/// A visit stays with its pet; any `petId` in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID")
    ),
    request_body = VisitFieldsDto,
    responses(
        (status = 204, description = "Visit updated"),
        (status = 400, description = "Invalid visit fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn update_visit(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(visit_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<VisitFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateVisitParam::from_dto(payload)?;

    ClinicService::new(&state.db)
        .update_visit(visit_id, param)
        .await?
        .ok_or_else(|| visit_not_found(visit_id))?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 204, description = "Visit deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Owner admin role required", body = ErrorDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_visit(
    _: Authorized<OwnerAdmin>,
    State(state): State<AppState>,
    ApiPath(visit_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ClinicService::new(&state.db).delete_visit(visit_id).await? {
        return Err(visit_not_found(visit_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn visit_not_found(visit_id: i32) -> AppError {
    AppError::NotFound(format!("Visit {} not found", visit_id))
}
