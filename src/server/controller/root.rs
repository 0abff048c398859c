use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

pub const SWAGGER_UI_INDEX: &str = "/swagger-ui/index.html";

/// Redirects the root path to the Swagger UI.
pub async fn redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, SWAGGER_UI_INDEX)])
}
