//! REST current-user provider.

use async_trait::async_trait;

use dokvault_core::AppResult;
use dokvault_core::traits::{CurrentUser, CurrentUserProvider};

use super::client::EntityClient;

/// [`CurrentUserProvider`] backed by the entity API's `/me` endpoint.
#[derive(Debug, Clone)]
pub struct RestUserProvider {
    client: EntityClient,
}

impl RestUserProvider {
    /// Create a provider over an existing client.
    pub fn new(client: EntityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CurrentUserProvider for RestUserProvider {
    async fn me(&self) -> AppResult<CurrentUser> {
        self.client
            .send_json(self.client.get("me"), "resolve current user")
            .await
    }
}
