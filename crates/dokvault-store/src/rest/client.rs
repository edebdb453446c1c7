//! Shared HTTP client for the remote entity API.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use dokvault_core::config::store::StoreConfig;
use dokvault_core::{AppError, AppResult};

/// Thin wrapper around [`reqwest::Client`] that applies the base URL and
/// bearer token and maps HTTP failures into [`AppError`].
///
/// No local timeout is set; a request fails only when the remote side
/// rejects or the connection drops.
#[derive(Debug, Clone)]
pub struct EntityClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl EntityClient {
    /// Create a client from the store configuration.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    /// Build an absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a GET request.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    /// Start a POST request.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    /// Start a PATCH request.
    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.patch(self.url(path)))
    }

    /// Start a DELETE request.
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.delete(self.url(path)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.api_token.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.api_token)
        }
    }

    /// Send a request and decode the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        context: &str,
    ) -> AppResult<T> {
        let response = Self::check(Self::dispatch(builder, context).await?, context).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::with_source(
                dokvault_core::error::ErrorKind::Store,
                format!("{context}: invalid response body: {e}"),
                e,
            ))
    }

    /// Send a request and discard the response body.
    pub async fn send_unit(&self, builder: RequestBuilder, context: &str) -> AppResult<()> {
        Self::check(Self::dispatch(builder, context).await?, context).await?;
        Ok(())
    }

    async fn dispatch(builder: RequestBuilder, context: &str) -> AppResult<Response> {
        builder.send().await.map_err(|e| {
            AppError::with_source(
                dokvault_core::error::ErrorKind::Store,
                format!("{context}: request failed: {e}"),
                e,
            )
        })
    }

    async fn check(response: Response, context: &str) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => AppError::not_found(format!("{context}: not found")),
            StatusCode::UNAUTHORIZED => {
                AppError::authentication(format!("{context}: not authenticated"))
            }
            _ => AppError::store(format!("{context}: {status}: {body}")),
        })
    }
}
