use karai_api::{ApiClient, ApiConfig};

use crate::config::WebConfig;

/// Shared application state passed to every handler via axum `State`.
///
/// Both clients are cookie-store-free on purpose: the gateway serves many
/// users, so credentials travel per request (forwarded `Cookie` headers),
/// never in shared client state.
#[derive(Clone)]
pub struct AppState {
    /// Typed backend client (session resolution).
    pub api: ApiClient,
    /// Plain client for the `/api/*` passthrough proxy.
    pub http: reqwest::Client,
    pub config: WebConfig,
}

impl AppState {
    pub fn new(config: WebConfig) -> Self {
        let plain = reqwest::Client::new();
        let api = ApiClient::with_http(plain.clone(), ApiConfig::server(&config.backend_url));
        Self {
            api,
            http: plain,
            config,
        }
    }
}
