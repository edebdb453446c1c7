//! Fixed current-user provider.

use async_trait::async_trait;

use dokvault_core::traits::{CurrentUser, CurrentUserProvider};
use dokvault_core::{AppError, AppResult};

/// [`CurrentUserProvider`] returning a fixed user, or an authentication
/// failure when constructed unauthenticated.
#[derive(Debug, Clone)]
pub struct StaticUserProvider {
    user: Option<CurrentUser>,
}

impl StaticUserProvider {
    /// A provider that always resolves to the named user.
    pub fn signed_in(full_name: impl Into<String>) -> Self {
        Self {
            user: Some(CurrentUser {
                full_name: full_name.into(),
                email: None,
            }),
        }
    }

    /// A provider that always fails to resolve a user.
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl CurrentUserProvider for StaticUserProvider {
    async fn me(&self) -> AppResult<CurrentUser> {
        self.user
            .clone()
            .ok_or_else(|| AppError::authentication("no user is signed in"))
    }
}
