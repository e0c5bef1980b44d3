//! HTTP client for the Karai backend API.
//!
//! Every call goes through one canonical decoder that absorbs the backend's
//! inconsistent response envelopes and yields `Result<T, ApiError>` — the
//! rest of the workspace never sees envelope drift. Credentials are
//! cookie-based and included on every request.

pub mod admin;
pub mod carts;
pub mod categories;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod meals;
pub mod orders;
pub mod providers;
pub mod reviews;
pub mod session;
pub mod upload;

pub use config::{ApiConfig, CallContext};
pub use error::ApiError;
pub use http::ApiClient;
pub use upload::ImageUploader;
