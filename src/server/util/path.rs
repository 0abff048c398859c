//! Path parameter extractor with the application's error mapping.

use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// Drop-in replacement for `axum::extract::Path` in handler arguments.
///
/// An id that does not parse, such as `/api/owners/abc`, surfaces as
/// `AppError::BadRequest` with the usual `ErrorDto` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
