//! Role-gated routing through the running gateway.

use axum::http::header::COOKIE;
use axum::http::{HeaderValue, StatusCode};

use karai_testing::MockBackend;
use karai_testing::fixture::{test_admin, test_customer, test_provider_user};

use crate::helpers::server_with_backend;

const SESSION_COOKIE: &str = "karai_session=abc123";

#[tokio::test]
async fn should_redirect_unauthenticated_dashboard_visit_to_login() {
    let (server, _backend) = server_with_backend(MockBackend::new()).await;

    let response = server.get("/dashboard").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn should_redirect_cookieless_subtree_visit_to_login() {
    let (server, _backend) = server_with_backend(MockBackend::new()).await;

    let response = server.get("/dashboard-admin/users").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn should_fan_out_dashboard_by_resolved_role() {
    let (server, _backend) =
        server_with_backend(MockBackend::new().with_session_user(test_provider_user())).await;

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static(SESSION_COOKIE))
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard-provider");
}

#[tokio::test]
async fn should_bounce_admin_out_of_provider_subtree() {
    let (server, _backend) =
        server_with_backend(MockBackend::new().with_session_user(test_admin())).await;

    let response = server
        .get("/dashboard-provider/orders")
        .add_header(COOKIE, HeaderValue::from_static(SESSION_COOKIE))
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard-admin");
}

#[tokio::test]
async fn should_serve_own_dashboard_subtree() {
    let (server, _backend) =
        server_with_backend(MockBackend::new().with_session_user(test_admin())).await;

    let response = server
        .get("/dashboard-admin/users")
        .add_header(COOKIE, HeaderValue::from_static(SESSION_COOKIE))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Manage Users"));
}

#[tokio::test]
async fn should_serve_customer_root_with_navigation() {
    let (server, _backend) =
        server_with_backend(MockBackend::new().with_session_user(test_customer())).await;

    let response = server
        .get("/dashboard-customer")
        .add_header(COOKIE, HeaderValue::from_static(SESSION_COOKIE))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("/dashboard-customer/orders"));
}

#[tokio::test]
async fn should_leave_public_paths_ungated() {
    let (server, _backend) = server_with_backend(MockBackend::new()).await;

    assert_eq!(server.get("/login").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_render_404_for_unknown_pages() {
    let (server, _backend) = server_with_backend(MockBackend::new()).await;

    let response = server.get("/no-such-page").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
