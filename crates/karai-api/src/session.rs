//! Session resolution against the external auth collaborator.

use reqwest::Method;
use reqwest::header::COOKIE;
use serde::Deserialize;

use karai_domain::user::User;

use crate::error::ApiError;
use crate::http::ApiClient;

/// `GET /api/auth/session` payload. This endpoint returns a bare body (no
/// success envelope); `user` is `null` when unauthenticated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionPayload {
    #[serde(default)]
    pub user: Option<User>,
}

impl ApiClient {
    /// Resolve the current session.
    ///
    /// `cookie` forwards a caller's `Cookie` header when resolving on behalf
    /// of a browser request (gateway context); `None` uses the client's own
    /// cookie store.
    pub async fn get_session(&self, cookie: Option<&str>) -> Result<SessionPayload, ApiError> {
        let mut request = self.request(Method::GET, "/api/auth/session");
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        self.execute(request).await
    }
}
