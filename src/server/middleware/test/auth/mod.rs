use axum::http::{header, HeaderMap, HeaderValue};
use base64::{engine::general_purpose::STANDARD, Engine};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory, factory::user::TEST_BCRYPT_COST};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    state::AppState,
};

mod require;

fn secured_state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), true, TEST_BCRYPT_COST)
}

fn basic_headers(username: &str, password: &str) -> HeaderMap {
    let encoded = STANDARD.encode(format!("{}:{}", username, password));
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap(),
    );
    headers
}
