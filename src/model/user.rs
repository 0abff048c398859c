use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RoleDto {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateUserDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub enabled: Option<bool>,
    pub roles: Option<Vec<RoleDto>>,
}

/// Created account as returned to clients. The password is never included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub enabled: bool,
    pub roles: Vec<RoleDto>,
}
