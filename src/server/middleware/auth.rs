use std::marker::PhantomData;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::user::UserService,
    state::AppState,
    util::basic_auth::parse_basic_credentials,
};

/// Role an endpoint can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    OwnerAdmin,
    VetAdmin,
    Admin,
}

impl Permission {
    /// Stored role name granting this permission.
    pub fn role_name(&self) -> &'static str {
        match self {
            Permission::OwnerAdmin => "ROLE_OWNER_ADMIN",
            Permission::VetAdmin => "ROLE_VET_ADMIN",
            Permission::Admin => "ROLE_ADMIN",
        }
    }
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Authenticates the request and checks that the user holds one of `permissions`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Valid credentials and at least one matching role
    /// - `Ok(None)` - Security is disabled, no check was made
    /// - `Err(AppError::AuthErr)` - Missing or invalid credentials, or no matching role
    pub async fn require(&self, permissions: &[Permission]) -> Result<Option<User>, AppError> {
        if !self.state.security_enabled {
            return Ok(None);
        }

        let credentials = parse_basic_credentials(self.headers)?;

        let user = UserService::new(&self.state.db, self.state.bcrypt_cost)
            .authenticate(&credentials.username, &credentials.password)
            .await?;

        if !permissions.iter().any(|p| user.has_role(p.role_name())) {
            let required = permissions
                .iter()
                .map(|p| p.role_name())
                .collect::<Vec<_>>()
                .join(", ");

            return Err(AuthError::AccessDenied(user.username, required).into());
        }

        Ok(Some(user))
    }
}

/// Set of permissions accepted by a group of endpoints.
pub trait AccessPolicy {
    const ALLOWED: &'static [Permission];
}

pub struct OwnerAdmin;
pub struct VetAdmin;
pub struct OwnerOrVetAdmin;
pub struct Admin;

impl AccessPolicy for OwnerAdmin {
    const ALLOWED: &'static [Permission] = &[Permission::OwnerAdmin];
}

impl AccessPolicy for VetAdmin {
    const ALLOWED: &'static [Permission] = &[Permission::VetAdmin];
}

impl AccessPolicy for OwnerOrVetAdmin {
    const ALLOWED: &'static [Permission] = &[Permission::OwnerAdmin, Permission::VetAdmin];
}

impl AccessPolicy for Admin {
    const ALLOWED: &'static [Permission] = &[Permission::Admin];
}

/// Extractor running `AuthGuard` for the policy `P`.
///
/// Handlers list it before any body extractor so that credentials are checked before
/// the payload is parsed.
pub struct Authorized<P>(PhantomData<fn() -> P>);

impl<P: AccessPolicy> FromRequestParts<AppState> for Authorized<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = AuthGuard::new(state, &parts.headers)
            .require(P::ALLOWED)
            .await?
        {
            tracing::debug!("{} {} by {}", parts.method, parts.uri.path(), user.username);
        }

        Ok(Self(PhantomData))
    }
}
