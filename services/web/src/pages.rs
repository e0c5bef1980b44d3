//! Dashboard shell pages.
//!
//! The shells anchor routing and carry each role's navigation; the
//! interactive views hydrate client-side from `karai-app`. Markup is
//! intentionally minimal.

use axum::extract::State;
use axum::response::{Html, Redirect};

use karai_app::routes::LOGIN_PATH;
use karai_core::error::AppError;

use crate::state::AppState;

fn shell(title: &str, nav: &[(&str, &str)]) -> Html<String> {
    shell_with_attrs(title, nav, "")
}

fn shell_with_attrs(title: &str, nav: &[(&str, &str)], extra_attrs: &str) -> Html<String> {
    let links: String = nav
        .iter()
        .map(|(label, href)| format!("<li><a href=\"{href}\">{label}</a></li>"))
        .collect();
    Html(format!(
        "<!doctype html>\n<html><head><title>{title} · Karai</title></head>\
         <body><main id=\"app\" data-view=\"{title}\"{extra_attrs}><h1>{title}</h1>\
         <nav><ul>{links}</ul></nav></main></body></html>"
    ))
}

/// Pages with an image-upload form carry the public image-host key for the
/// browser-side uploader.
fn upload_attrs(state: &AppState) -> String {
    match &state.config.imgbb_api_key {
        Some(key) => format!(" data-image-host-key=\"{key}\""),
        None => String::new(),
    }
}

pub async fn login() -> Html<String> {
    shell("Sign in", &[])
}

/// `/dashboard` is always intercepted by the role gate; anyone who reaches
/// the handler had no session.
pub async fn dashboard_index() -> Redirect {
    Redirect::to(LOGIN_PATH)
}

pub async fn admin_root() -> Html<String> {
    shell(
        "Admin Dashboard",
        &[
            ("Manage Users", "/dashboard-admin/users"),
            ("Manage Categories", "/dashboard-admin/categories"),
            ("Orders", "/dashboard-admin/orders"),
        ],
    )
}

pub async fn admin_users() -> Html<String> {
    shell("Manage Users", &[("Admin Dashboard", "/dashboard-admin")])
}

pub async fn admin_categories() -> Html<String> {
    shell("Manage Categories", &[("Admin Dashboard", "/dashboard-admin")])
}

pub async fn admin_orders() -> Html<String> {
    shell("Orders", &[("Admin Dashboard", "/dashboard-admin")])
}

pub async fn provider_root() -> Html<String> {
    shell(
        "Provider Dashboard",
        &[
            ("Provider Profile", "/dashboard-provider/profile"),
            ("Manage Meals", "/dashboard-provider/meals"),
            ("Manage Orders", "/dashboard-provider/orders"),
        ],
    )
}

pub async fn provider_profile(State(state): State<AppState>) -> Html<String> {
    shell_with_attrs(
        "Provider Profile",
        &[("Provider Dashboard", "/dashboard-provider")],
        &upload_attrs(&state),
    )
}

pub async fn provider_meals(State(state): State<AppState>) -> Html<String> {
    shell_with_attrs(
        "Manage Meals",
        &[("Provider Dashboard", "/dashboard-provider")],
        &upload_attrs(&state),
    )
}

pub async fn provider_orders() -> Html<String> {
    shell("Manage Orders", &[("Provider Dashboard", "/dashboard-provider")])
}

pub async fn customer_root() -> Html<String> {
    shell(
        "My Profile",
        &[
            ("My Profile", "/dashboard-customer"),
            ("My Orders", "/dashboard-customer/orders"),
        ],
    )
}

pub async fn customer_orders() -> Html<String> {
    shell("My Orders", &[("My Profile", "/dashboard-customer")])
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_render_role_navigation() {
        let Html(body) = admin_root().await;
        assert!(body.contains("/dashboard-admin/users"));
        assert!(body.contains("/dashboard-admin/categories"));
        assert!(body.contains("/dashboard-admin/orders"));
    }

    #[tokio::test]
    async fn should_expose_image_host_key_on_upload_pages() {
        use crate::config::WebConfig;

        let mut config = WebConfig::for_backend("http://backend:4000");
        config.imgbb_api_key = Some("pub_key_123".into());
        let state = AppState::new(config);

        let Html(body) = provider_meals(State(state)).await;
        assert!(body.contains("data-image-host-key=\"pub_key_123\""));
    }

    #[tokio::test]
    async fn not_found_is_a_404() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;
        let resp = not_found().await.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
