//! The canonical error taxonomy at the service boundary.

/// Errors surfaced by every backend call.
///
/// `Validation` never reaches the network — controllers raise it before a
/// request is built. The rest classify transport and response failures.
/// Errors are always returned as values; nothing is thrown past the service
/// boundary in the common path.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, aborted body).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Client-side constraint violation; no request was issued.
    #[error("{0}")]
    Validation(String),
    /// Role or ownership mismatch, locally or via 401/403.
    #[error("not authorized")]
    Authorization,
    /// Requested entity absent (404 or backend not-found failure).
    #[error("not found")]
    NotFound,
    /// Non-2xx or `success: false` response, carrying the backend's message.
    #[error("{message}")]
    Backend { message: String },
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK",
            Self::Validation(_) => "VALIDATION",
            Self::Authorization => "AUTHORIZATION",
            Self::NotFound => "NOT_FOUND",
            Self::Backend { .. } => "BACKEND",
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
