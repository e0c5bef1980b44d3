//! Client configuration and the server/browser base-URL asymmetry.

/// Where the client code is executing.
///
/// The base URL must be supplied distinctly per context: browser-side code
/// talks same-origin (requests go through the web gateway's `/api` proxy),
/// server-side code talks to the backend's absolute URL directly. The
/// asymmetry is part of the deployment contract and must not be collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallContext {
    /// Server-side rendering / gateway context: absolute backend URL.
    Server,
    /// Browser context: same-origin, proxied by the gateway.
    Browser,
}

/// Backend API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without a trailing slash. For [`CallContext::Server`] this
    /// is the backend itself; for [`CallContext::Browser`] it is the page
    /// origin, whose `/api` subtree the gateway proxies.
    pub base_url: String,
    pub context: CallContext,
}

impl ApiConfig {
    /// Server-side configuration pointing straight at the backend.
    pub fn server(backend_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(backend_url.into()),
            context: CallContext::Server,
        }
    }

    /// Browser-side configuration: requests stay on the page origin.
    pub fn browser(origin: impl Into<String>) -> Self {
        Self {
            base_url: normalize(origin.into()),
            context: CallContext::Browser,
        }
    }

    /// Server-side configuration from the `BACKEND_URL` env var.
    ///
    /// # Panics
    ///
    /// Panics if `BACKEND_URL` is unset.
    pub fn from_env() -> Self {
        Self::server(std::env::var("BACKEND_URL").expect("BACKEND_URL must be set"))
    }
}

fn normalize(url: String) -> String {
    url.trim_end_matches('/').to_owned()
}
