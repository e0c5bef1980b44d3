use karai_core::config::{parsed_or, required};

/// Web gateway configuration loaded from environment variables.
///
/// The backend base URL here is the server-side absolute URL; browser-side
/// code never sees it and talks same-origin through this gateway's `/api`
/// proxy instead. That asymmetry is deliberate and load-bearing.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Absolute backend URL, e.g. `http://backend:4000`. Env var: `BACKEND_URL`.
    pub backend_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `WEB_PORT`.
    pub web_port: u16,
    /// API key for the third-party image host. Env var: `IMGBB_API_KEY`.
    pub imgbb_api_key: Option<String>,
}

impl WebConfig {
    pub fn from_env() -> Self {
        Self {
            backend_url: required("BACKEND_URL"),
            web_port: parsed_or("WEB_PORT", 3000),
            imgbb_api_key: std::env::var("IMGBB_API_KEY").ok(),
        }
    }

    pub fn for_backend(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into().trim_end_matches('/').to_owned(),
            web_port: 3000,
            imgbb_api_key: None,
        }
    }
}
