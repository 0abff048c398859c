use axum::{
    http::{header, HeaderName},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{owner, pet, pet_type, root, specialty, user, vet, visit},
    error::validation::ERRORS_HEADER,
    state::AppState,
};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Clinic REST API",
        description = "Owners, pets, visits, vets and their specialties"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "owner", description = "Owners and their pets and visits"),
        (name = "pet", description = "Pets"),
        (name = "pettype", description = "Kinds of pets"),
        (name = "visit", description = "Visits of pets"),
        (name = "vet", description = "Vets and their specialties"),
        (name = "specialty", description = "Vet specialties"),
        (name = "user", description = "Login accounts")
    )
)]
pub struct ApiDoc;

/// Registers the HTTP Basic scheme referenced by the handlers' `security` blocks.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
    }
}

/// Builds every `/api` route together with its OpenAPI document.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(owner::list_owners, owner::add_owner))
        .routes(routes!(
            owner::get_owner,
            owner::update_owner,
            owner::delete_owner
        ))
        .routes(routes!(owner::add_pet_to_owner))
        .routes(routes!(owner::get_owner_pet, owner::update_owner_pet))
        .routes(routes!(owner::add_visit_to_owner))
        .routes(routes!(pet::list_pets, pet::add_pet))
        .routes(routes!(pet::get_pet, pet::update_pet, pet::delete_pet))
        .routes(routes!(pet_type::list_pet_types, pet_type::add_pet_type))
        .routes(routes!(
            pet_type::get_pet_type,
            pet_type::update_pet_type,
            pet_type::delete_pet_type
        ))
        .routes(routes!(visit::list_visits, visit::add_visit))
        .routes(routes!(
            visit::get_visit,
            visit::update_visit,
            visit::delete_visit
        ))
        .routes(routes!(vet::list_vets, vet::add_vet))
        .routes(routes!(vet::get_vet, vet::update_vet, vet::delete_vet))
        .routes(routes!(specialty::list_specialties, specialty::add_specialty))
        .routes(routes!(
            specialty::get_specialty,
            specialty::update_specialty,
            specialty::delete_specialty
        ))
        .routes(routes!(user::add_user))
        .split_for_parts()
}

/// Builds the complete application with CORS, request tracing and state attached.
///
/// API paths are matched with or without a trailing slash. The Swagger UI is kept
/// outside the normalization since it redirects `/swagger-ui` to `/swagger-ui/`.
pub fn build_app(state: AppState) -> Router {
    let (api, openapi) = api_router();
    let api = NormalizePath::trim_trailing_slash(api.with_state(state));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(ERRORS_HEADER), header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root::redirect))
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, openapi))
        .fallback_service(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
