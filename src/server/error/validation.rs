use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto};

/// Name of the response header carrying the serialized field errors.
pub const ERRORS_HEADER: &str = "errors";

/// A single rejected field of a request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Name of the payload object, e.g. `owner`
    pub object_name: String,
    /// Name of the rejected field as it appears on the wire
    pub field_name: String,
    /// The rejected value, `None` when the field was missing or null
    pub field_value: Option<String>,
    /// Human readable reason the value was rejected
    pub error_message: String,
}

impl FieldError {
    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            object_name: self.object_name,
            field_name: self.field_name,
            field_value: self.field_value,
            error_message: self.error_message,
        }
    }
}

/// Request payload failed validation.
///
/// Carries every field error found so clients can fix all of them in one round trip.
#[derive(Error, Debug)]
#[error("Validation failed for {} field(s)", errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates a validation error for a single field.
    pub fn field(
        object_name: &str,
        field_name: &str,
        field_value: Option<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            errors: vec![FieldError {
                object_name: object_name.to_string(),
                field_name: field_name.to_string(),
                field_value,
                error_message: error_message.into(),
            }],
        }
    }
}

/// Converts validation errors into a 400 Bad Request response.
///
/// The field errors are returned both in the JSON body and, serialized as a JSON array,
/// in the `errors` response header. The header is omitted if the serialized list is not
/// a valid header value.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let errors: Vec<FieldErrorDto> = self.errors.into_iter().map(FieldError::into_dto).collect();

        let header = serde_json::to_string(&errors)
            .ok()
            .and_then(|json| HeaderValue::from_str(&json).ok());

        let mut response = (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Validation failed".to_string(),
                errors,
            }),
        )
            .into_response();

        if let Some(value) = header {
            response
                .headers_mut()
                .insert(HeaderName::from_static(ERRORS_HEADER), value);
        }

        response
    }
}
