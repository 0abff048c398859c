//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the pet clinic: HTTP endpoints,
//! business logic, data access and infrastructure. The backend uses Axum as the web
//! framework, SeaORM for database operations and utoipa for the OpenAPI document.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Reference checks, ownership rules and credential handling
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - HTTP Basic authentication and role guards
//! - **Utilities** (`util/`) - Payload validation, JSON and path extraction, Basic header parsing
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, security settings)
//! - **Startup** (`startup`) - Database connection, migrations and the bootstrap admin
//! - **Router** (`router`) - Axum route configuration, CORS, tracing and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the caller and checks the endpoint's roles
//! 3. **Controller** validates the payload into params, calls service
//! 4. **Service** checks references between resources, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
