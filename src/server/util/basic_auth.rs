//! Parsing of HTTP Basic `Authorization` headers.

use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::error::auth::AuthError;

/// Username and password decoded from an `Authorization: Basic` header.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Extracts Basic credentials from request headers.
///
/// The scheme name is matched case-insensitively. The decoded payload is split on the
/// first `:` so passwords may themselves contain colons.
///
/// # Arguments
/// - `headers` - Request headers to read the `Authorization` header from
///
/// # Returns
/// - `Ok(BasicCredentials)` - Decoded username and password
/// - `Err(AuthError::MissingCredentials)` - No `Authorization` header present
/// - `Err(AuthError::MalformedCredentials)` - Header is not a valid Basic credential
pub fn parse_basic_credentials(headers: &HeaderMap) -> Result<BasicCredentials, AuthError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Err(AuthError::MissingCredentials);
    };

    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedCredentials("header is not visible ASCII".to_string()))?;

    let Some((scheme, encoded)) = value.trim().split_once(' ') else {
        return Err(AuthError::MalformedCredentials(
            "missing authentication scheme".to_string(),
        ));
    };

    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::MalformedCredentials(format!(
            "unsupported scheme '{}'",
            scheme
        )));
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AuthError::MalformedCredentials("payload is not UTF-8".to_string()))?;

    let Some((username, password)) = decoded.split_once(':') else {
        return Err(AuthError::MalformedCredentials(
            "payload has no ':' separator".to_string(),
        ));
    };

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
