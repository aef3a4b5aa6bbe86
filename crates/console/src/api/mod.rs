//! Courtside platform API client.
//!
//! The console owns no data of its own: coaches, users, storage buckets,
//! action logs, and daily reports all live behind the platform REST API.
//! This client wraps that API with typed methods, one group per collection:
//!
//! - [`coaches`] - coach accounts (list, create, block, unblock)
//! - [`users`] - user accounts (list, create)
//! - [`storage`] - storage buckets (list, create)
//! - [`reports`] - action logs and the daily activity report
//!
//! # Example
//!
//! ```rust,ignore
//! use courtside_console::api::ConsoleApiClient;
//!
//! let client = ConsoleApiClient::new(&config.api)?;
//!
//! let coaches = client.list_coaches().await?;
//! let outcome = client.block_coach(&email).await?;
//! ```

mod coaches;
mod reports;
mod storage;
mod types;
mod users;

pub use types::*;

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use thiserror::Error;
use url::Url;

use crate::config::ApiConfig;

/// Errors that can occur when calling the platform API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build a request URL.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unauthorized (missing or invalid API token).
    #[error("Unauthorized: invalid API token")]
    Unauthorized,
}

/// Platform API client.
///
/// Cheap to clone; the underlying `reqwest::Client` and base URL are shared.
#[derive(Clone)]
pub struct ConsoleApiClient {
    inner: Arc<ConsoleApiClientInner>,
}

struct ConsoleApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ConsoleApiClient {
    /// Create a new platform API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or the bearer token
    /// is not a valid header value.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = config.token() {
            let auth_value = format!("Bearer {token}");
            let mut value = HeaderValue::from_str(&auth_value)
                .map_err(|e| ApiError::Parse(format!("Invalid API token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert("Authorization", value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ConsoleApiClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// The configured platform API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Build a full request URL from an API path.
    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::Parse(format!("Invalid API path {path}: {e}")))
    }

    /// Execute a GET request against the platform API.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let response = self.inner.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request against the platform API.
    pub(crate) async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let response = self.inner.client.post(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Parse an error response from the platform API.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }

        if status == 404 {
            return ApiError::NotFound("Resource not found".to_string());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ApiError::Api { status, message }
    }
}

impl std::fmt::Debug for ConsoleApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}
