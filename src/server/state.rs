//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Application state containing shared resources and settings.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool whose clones share the
/// underlying connections, and the remaining fields are plain values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Whether requests must authenticate and hold the endpoint's role.
    pub security_enabled: bool,

    /// Work factor used when hashing passwords of newly created users.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `security_enabled` - Whether the role gate is active
    /// - `bcrypt_cost` - Work factor for hashing new passwords
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, security_enabled: bool, bcrypt_cost: u32) -> Self {
        Self {
            db,
            security_enabled,
            bcrypt_cost,
        }
    }

    /// Creates the application state from the loaded configuration.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        Self::new(db, config.security_enabled, config.bcrypt_cost)
    }
}
