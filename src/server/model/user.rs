//! User domain models and parameters.
//!
//! Users are the login accounts checked by HTTP Basic authentication. The password hash
//! never leaves the data layer, so the domain model only carries the username, the
//! enabled flag and the granted roles.

use crate::{
    model::user::{CreateUserDto, RoleDto, UserDto},
    server::{error::validation::ValidationError, util::validate::Validator},
};

/// Prefix every stored role name carries.
pub const ROLE_PREFIX: &str = "ROLE_";

/// bcrypt only uses the first 72 bytes of a password.
const MAX_PASSWORD_BYTES: usize = 72;

/// Login account with its granted roles.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub enabled: bool,
    /// Stored role names, e.g. `ROLE_OWNER_ADMIN`
    pub roles: Vec<String>,
}

impl User {
    /// Converts a user entity and its role rows to the user domain model.
    pub fn from_entity(entity: entity::user::Model, roles: Vec<entity::role::Model>) -> Self {
        Self {
            username: entity.username,
            enabled: entity.enabled,
            roles: roles.into_iter().map(|role| role.role).collect(),
        }
    }

    /// Checks whether the user holds the stored role name.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            enabled: self.enabled,
            roles: self
                .roles
                .into_iter()
                .map(|name| RoleDto { name: Some(name) })
                .collect(),
        }
    }
}

/// Parameters for creating a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    /// Plain-text password, hashed by the service before storage
    pub password: String,
    pub enabled: bool,
    /// Distinct role names, each carrying the `ROLE_` prefix
    pub roles: Vec<String>,
}

impl CreateUserParam {
    /// Validates the request payload and normalizes role names.
    ///
    /// Role names without the `ROLE_` prefix receive it, so `OWNER_ADMIN` and
    /// `ROLE_OWNER_ADMIN` are equivalent. Accounts are enabled unless the payload says
    /// otherwise.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - All fields valid and at least one role given
    /// - `Err(ValidationError)` - Every rejected field
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationError> {
        let mut v = Validator::new("user");
        let username = v.text("username", dto.username, 20);
        let password = v.text("password", dto.password, MAX_PASSWORD_BYTES);
        // Characters were counted above; multi-byte text can still exceed the byte limit.
        if password.chars().count() <= MAX_PASSWORD_BYTES && password.len() > MAX_PASSWORD_BYTES
        {
            v.reject(
                "password",
                None,
                format!("size must be at most {} bytes", MAX_PASSWORD_BYTES),
            );
        }

        let mut roles: Vec<String> = Vec::new();
        let mut role_rejected = false;
        for role in dto.roles.unwrap_or_default() {
            let Some(name) = role.name.filter(|n| !n.trim().is_empty()) else {
                v.reject("roles", None, "role name must not be blank");
                role_rejected = true;
                continue;
            };

            let name = if name.starts_with(ROLE_PREFIX) {
                name
            } else {
                format!("{}{}", ROLE_PREFIX, name)
            };

            if name.chars().count() > 20 {
                v.reject("roles", Some(name), "role name must be at most 20 characters");
                role_rejected = true;
            } else if !roles.contains(&name) {
                roles.push(name);
            }
        }

        if roles.is_empty() && !role_rejected {
            v.reject("roles", None, "user must have at least one role");
        }
        v.finish()?;

        Ok(Self {
            username,
            password,
            enabled: dto.enabled.unwrap_or(true),
            roles,
        })
    }
}
