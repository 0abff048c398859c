use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    factory::user::{UserFactory, TEST_BCRYPT_COST},
};
use tower::ServiceExt;

use crate::server::{router::build_app, state::AppState};


const OWNER_ADMIN: (&str, &str) = ("owneradmin", "pw");
const VET_ADMIN: (&str, &str) = ("vetadmin", "pw");
const ADMIN: (&str, &str) = ("admin", "pw");

/// Application over a migrated in-memory database holding the sample clinic.
struct TestApp {
    app: Router,
    db: DatabaseConnection,
}

impl TestApp {
    /// Builds the app with one user per role: `owneradmin`, `vetadmin` and `admin`.
    async fn seeded(security_enabled: bool) -> Self {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        Self::with_users(db, security_enabled).await
    }

    /// Builds the app over the clinic schema without any sample data.
    async fn empty() -> Self {
        let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();

        Self::with_users(test.db.unwrap(), true).await
    }

    async fn with_users(db: DatabaseConnection, security_enabled: bool) -> Self {
        for ((username, password), role) in [
            (OWNER_ADMIN, "ROLE_OWNER_ADMIN"),
            (VET_ADMIN, "ROLE_VET_ADMIN"),
            (ADMIN, "ROLE_ADMIN"),
        ] {
            UserFactory::new(&db)
                .username(username)
                .password(password)
                .role(role)
                .build()
                .await
                .unwrap();
        }

        let app = build_app(AppState::new(db.clone(), security_enabled, TEST_BCRYPT_COST));

        Self { app, db }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn get(&self, uri: &str, user: (&str, &str)) -> TestResponse {
        self.send(request(Method::GET, uri, Some(user), None)).await
    }

    async fn post(&self, uri: &str, user: (&str, &str), body: Value) -> TestResponse {
        self.send(request(Method::POST, uri, Some(user), Some(body)))
            .await
    }

    async fn put(&self, uri: &str, user: (&str, &str), body: Value) -> TestResponse {
        self.send(request(Method::PUT, uri, Some(user), Some(body)))
            .await
    }

    async fn delete(&self, uri: &str, user: (&str, &str)) -> TestResponse {
        self.send(request(Method::DELETE, uri, Some(user), None))
            .await
    }
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl TestResponse {
    fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap()
    }

    /// Field names of the validation errors in the body.
    fn rejected_fields(&self) -> Vec<String> {
        self.body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|error| error["fieldName"].as_str().unwrap().to_string())
            .collect()
    }
}

fn request(
    method: Method,
    uri: &str,
    user: Option<(&str, &str)>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some((username, password)) = user {
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        builder = builder.header(header::AUTHORIZATION, format!("Basic {}", encoded));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn owner_body(first_name: &str, last_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": last_name,
        "address": "110 W. Liberty St.",
        "city": "Madison",
        "telephone": "6085551023"
    })
}
