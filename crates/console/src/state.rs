//! Application state shared across handlers.

use std::sync::Arc;

use crate::{api::ConsoleApiClient, config::ConsoleConfig};

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind a single `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ConsoleConfig,
    api_client: ConsoleApiClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: ConsoleConfig, api_client: ConsoleApiClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, api_client }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn api(&self) -> &ConsoleApiClient {
        &self.inner.api_client
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api", &self.inner.api_client)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn test_state() -> AppState {
        let api = ApiConfig {
            base_url: url::Url::parse("http://platform.internal:5000").unwrap(),
            token: None,
        };
        let config = ConsoleConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            api: api.clone(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };
        let client = ConsoleApiClient::new(&api).unwrap();
        AppState::new(config, client)
    }

    #[test]
    fn test_accessors_reach_shared_inner() {
        let state = test_state();
        assert_eq!(state.config().socket_addr().to_string(), "127.0.0.1:4000");
        assert_eq!(
            state.api().base_url().as_str(),
            "http://platform.internal:5000/"
        );

        // Clones share the same inner
        let clone = state.clone();
        assert_eq!(clone.config().port, state.config().port);
    }
}
