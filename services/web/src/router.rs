use axum::Router;
use axum::middleware;
use axum::routing::{any, get};
use tower_http::trace::TraceLayer;

use karai_core::health::{healthz, readyz};
use karai_core::middleware::request_id_layer;

use crate::guard::role_gate;
use crate::pages;
use crate::proxy::proxy_api;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/login", get(pages::login))
        // Role-gated dashboards
        .route("/dashboard", get(pages::dashboard_index))
        .route("/dashboard-admin", get(pages::admin_root))
        .route("/dashboard-admin/users", get(pages::admin_users))
        .route("/dashboard-admin/categories", get(pages::admin_categories))
        .route("/dashboard-admin/orders", get(pages::admin_orders))
        .route("/dashboard-provider", get(pages::provider_root))
        .route("/dashboard-provider/profile", get(pages::provider_profile))
        .route("/dashboard-provider/meals", get(pages::provider_meals))
        .route("/dashboard-provider/orders", get(pages::provider_orders))
        .route("/dashboard-customer", get(pages::customer_root))
        .route("/dashboard-customer/orders", get(pages::customer_orders))
        // Same-origin API proxy
        .route("/api/{*path}", any(proxy_api))
        .fallback(pages::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), role_gate))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
