//! Current-user provider trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// The authenticated user as reported by the external user-entity
/// collaborator. Authentication itself is out of scope; this core only
/// consumes the resolved identity.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CurrentUser {
    /// Human-readable full name, recorded as `created_by` on new versions.
    pub full_name: String,
    /// Email address.
    pub email: Option<String>,
}

/// Trait for resolving the acting user.
#[async_trait]
pub trait CurrentUserProvider: Send + Sync + 'static {
    /// Resolve the current user. Fails with an authentication error when
    /// no user is signed in.
    async fn me(&self) -> AppResult<CurrentUser>;
}
