//! JSON request body extractor with the application's error mapping.

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// Drop-in replacement for `axum::Json` in handler arguments.
///
/// Rejections (missing content type, malformed or mistyped JSON) surface as
/// `AppError::BadRequest` so clients receive the usual `ErrorDto` body with a
/// 400 status instead of axum's plain text 415/422 responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
