//! User service for account creation and credential checks.
//!
//! This module provides the `UserService` which owns every use of bcrypt: passwords are
//! hashed here before they reach the repository, and HTTP Basic credentials are verified
//! here against the stored hash. Both run on tokio's blocking pool so a slow hash never
//! holds up the runtime's worker threads.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{CreateUserParam, User},
};

/// Service providing business logic for login accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Work factor used when hashing new passwords
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Creates a login account with a hashed password.
    ///
    /// # Arguments
    /// - `param` - Validated username, plain-text password, enabled flag and roles
    ///
    /// # Returns
    /// - `Ok(User)` - The created user, without password
    /// - `Err(AppError::ValidationErr)` - The username is already taken
    /// - `Err(AppError::BcryptErr)` - Password hashing failed
    /// - `Err(AppError::JoinErr)` - The hashing task panicked
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.exists(&param.username).await? {
            return Err(ValidationError::field(
                "user",
                "username",
                Some(param.username.clone()),
                "username is already taken",
            )
            .into());
        }

        let password = param.password.clone();
        let cost = self.bcrypt_cost;
        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        let user = repo.create(param, password_hash).await?;

        tracing::info!("Created user {} with roles {:?}", user.username, user.roles);

        Ok(user)
    }

    /// Verifies HTTP Basic credentials.
    ///
    /// Unknown usernames, disabled accounts and wrong passwords all produce the same
    /// error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid and the account is enabled
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Any credential check failed
    /// - `Err(AppError::DbErr)` - Database error during lookup
    /// - `Err(AppError::JoinErr)` - The verification task panicked
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, password_hash)) = repo.find_for_authentication(username).await? else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !user.enabled {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        // A stored value that is not a bcrypt hash never matches.
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || {
            bcrypt::verify(password, &password_hash).unwrap_or(false)
        })
        .await?;

        if !matches {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        Ok(user)
    }

    /// Creates the account unless a user with that username already exists.
    ///
    /// Existing accounts are left untouched, including their password and roles.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was created
    /// - `Ok(false)` - The username was already taken
    pub async fn ensure_user(
        &self,
        username: &str,
        password: &str,
        roles: &[&str],
    ) -> Result<bool, AppError> {
        if UserRepository::new(self.db).exists(username).await? {
            return Ok(false);
        }

        self.create_user(CreateUserParam {
            username: username.to_string(),
            password: password.to_string(),
            enabled: true,
            roles: roles.iter().map(|role| role.to_string()).collect(),
        })
        .await?;

        Ok(true)
    }
}
