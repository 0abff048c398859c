use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{Admin, Authorized},
        model::user::CreateUserParam,
        service::user::UserService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a login account.
///
/// Role names may be given with or without the `ROLE_` prefix. The password is stored
/// as a bcrypt hash and is never returned.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The created account without its password
/// - `400 Bad Request` - Invalid fields, no role, or username already taken
/// - `401 Unauthorized` / `403 Forbidden` - Access denied
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_user(
    _: Authorized<Admin>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::from_dto(payload)?;

    let user = UserService::new(&state.db, state.bcrypt_cost)
        .create_user(param)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
