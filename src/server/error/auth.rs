use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const BASIC_REALM: &str = "Basic realm=\"petclinic\"";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Request is missing HTTP Basic credentials")]
    MissingCredentials,

    /// `Authorization` header is present but is not a decodable Basic credential.
    ///
    /// Covers other schemes, invalid base64, non UTF-8 payloads and a payload
    /// without the `username:password` separator.
    #[error("Malformed HTTP Basic credentials: {0}")]
    MalformedCredentials(String),

    /// Username is unknown, the account is disabled, or the password does not match.
    ///
    /// The three cases share one variant so responses never reveal which check failed.
    #[error("Invalid credentials for user {0}")]
    InvalidCredentials(String),

    /// Authenticated user lacks every role accepted by the endpoint.
    ///
    /// # Fields
    /// - Username of the authenticated user
    /// - Description of the roles the endpoint accepts
    #[error("User {0} denied access, requires one of: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Credential failures map to 401 Unauthorized with a Basic challenge so that clients
/// can retry with credentials. Role failures map to 403 Forbidden. Details are logged
/// at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - For missing, malformed or invalid credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Access denied")),
            )
                .into_response(),
            Self::MissingCredentials
            | Self::MalformedCredentials(_)
            | Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, BASIC_REALM)],
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
        }
    }
}
