//! Same-origin `/api/*` passthrough to the backend.
//!
//! Browser-side code talks to this gateway's origin; the proxy rebuilds each
//! request against the absolute backend URL, forwarding method, query,
//! headers (cookies included), and body, and relays the backend's response
//! verbatim — envelope drift and all.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST, TRANSFER_ENCODING};
use axum::response::Response;

use karai_core::error::AppError;

use crate::state::AppState;

/// Request bodies above this size are rejected rather than buffered.
const MAX_PROXY_BODY: usize = 10 * 1024 * 1024;

pub async fn proxy_api(State(state): State<AppState>, req: Request) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, MAX_PROXY_BODY)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| parts.uri.path());
    let url = format!("{}{}", state.config.backend_url, path_and_query);

    let mut headers = parts.headers.clone();
    headers.remove(HOST);

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(bytes)
        .send()
        .await
        .map_err(|e| AppError::Upstream(anyhow::Error::new(e)))?;

    let status = upstream.status();
    let upstream_headers = upstream.headers().clone();
    let payload = upstream
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(anyhow::Error::new(e)))?;

    let mut response = Response::builder().status(status);
    for (name, value) in upstream_headers.iter() {
        // Hop-by-hop and length headers are re-established by the server.
        if name == TRANSFER_ENCODING || name == CONNECTION || name == CONTENT_LENGTH {
            continue;
        }
        response = response.header(name, value);
    }
    response
        .body(Body::from(payload))
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))
}
