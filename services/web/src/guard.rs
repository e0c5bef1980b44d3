//! Role-gated routing middleware.
//!
//! For every dashboard path the gateway resolves the caller's session
//! against the backend (forwarding their cookies) and applies the route
//! decision as a redirect. A user can never land on a foreign role's
//! dashboard subtree; the backend still re-enforces everything the views do.

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use karai_app::routes::{RouteDecision, is_gated, route_decision};
use karai_app::session::SessionState;
use karai_core::error::AppError;

use crate::state::AppState;

pub async fn role_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if !is_gated(&path) {
        return next.run(req).await;
    }

    // No cookies at all means no session; skip the backend round trip.
    let jar = CookieJar::from_headers(req.headers());
    let session = if jar.iter().next().is_none() {
        SessionState::Unauthenticated
    } else {
        let cookie = req
            .headers()
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        match state.api.get_session(cookie.as_deref()).await {
            Ok(payload) => match payload.user {
                Some(user) => SessionState::Authenticated(user),
                None => SessionState::Unauthenticated,
            },
            Err(e) => return AppError::Upstream(anyhow::Error::new(e)).into_response(),
        }
    };

    match route_decision(&path, &session) {
        RouteDecision::Allow => next.run(req).await,
        RouteDecision::Redirect(target) => Redirect::to(target).into_response(),
    }
}
