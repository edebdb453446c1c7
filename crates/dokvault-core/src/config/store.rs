//! Remote entity store configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the remote document entity API.
///
/// No local request timeout is configured: failures surface only when the
/// remote call itself rejects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the entity API (e.g. `https://api.example.com/v1`).
    pub base_url: String,
    /// Bearer token used for every request.
    #[serde(default)]
    pub api_token: String,
}
