//! User factory for creating test login accounts with roles.
//!
//! Passwords are hashed with a low bcrypt cost to keep tests fast.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Bcrypt cost used for test accounts. The minimum bcrypt accepts.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Default password of factory-created users.
pub const DEFAULT_PASSWORD: &str = "secret";

/// Factory for creating test users.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("vetadmin")
///     .role("ROLE_VET_ADMIN")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
    enabled: bool,
    roles: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"`
    /// - password: `DEFAULT_PASSWORD`
    /// - enabled: `true`
    /// - roles: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password: DEFAULT_PASSWORD.to_string(),
            enabled: true,
            roles: Vec::new(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Adds a stored role name, e.g. `"ROLE_OWNER_ADMIN"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Builds and inserts the user and its roles.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity (password field holds the hash)
    /// - `Err(DbErr)` - Hashing failure or database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))?;

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(self.username.clone()),
            password: ActiveValue::Set(hash),
            enabled: ActiveValue::Set(self.enabled),
        }
        .insert(self.db)
        .await?;

        for role in self.roles {
            entity::role::ActiveModel {
                id: ActiveValue::NotSet,
                username: ActiveValue::Set(self.username.clone()),
                role: ActiveValue::Set(role),
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates an enabled user holding a single role.
pub async fn create_user(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
