//! `/api/*` passthrough behavior: the browser talks same-origin, the
//! gateway relays to the backend's absolute URL.

use axum::http::StatusCode;
use serde_json::json;

use karai_testing::MockBackend;
use karai_testing::fixture::{test_customer, test_meal};

use crate::helpers::server_with_backend;

#[tokio::test]
async fn should_relay_meal_listing_with_envelope_intact() {
    let (server, _backend) = server_with_backend(
        MockBackend::new().with_meals(vec![
            test_meal("meal_1", "prov_1", 120.0),
            test_meal("meal_2", "prov_1", 80.0),
        ]),
    )
    .await;

    let response = server.get("/api/meals").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pagination"]["total"], 2);
}

#[tokio::test]
async fn should_forward_query_parameters() {
    let (server, backend) = server_with_backend(
        MockBackend::new().with_meals(vec![test_meal("meal_1", "prov_1", 120.0)]),
    )
    .await;

    let response = server.get("/api/meals?providerId=prov_2&sortBy=price").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["data"]["data"].as_array().unwrap().is_empty());

    let queries = backend.meal_queries();
    assert!(queries[0].contains("providerId=prov_2"));
    assert!(queries[0].contains("sortBy=price"));
}

#[tokio::test]
async fn should_relay_authorization_failures_verbatim() {
    // No session user on the backend: cart adds are refused upstream.
    let (server, _backend) = server_with_backend(MockBackend::new()).await;

    let response = server
        .post("/api/carts")
        .json(&json!({"mealId": "meal_1", "quantity": 1}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn should_relay_mutations_to_the_backend() {
    let (server, backend) = server_with_backend(
        MockBackend::new()
            .with_session_user(test_customer())
            .with_meals(vec![test_meal("meal_1", "prov_1", 150.0)]),
    )
    .await;

    let response = server
        .post("/api/carts")
        .json(&json!({"mealId": "meal_1", "quantity": 2}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let items = backend.cart_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);

    // And reads observe the write through the same proxy.
    let response = server.get("/api/carts").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_surface_unreachable_backend_as_bad_gateway() {
    use karai_web::config::WebConfig;
    use karai_web::router::build_router;
    use karai_web::state::AppState;

    // Nothing listens on this port.
    let state = AppState::new(WebConfig::for_backend("http://127.0.0.1:9"));
    let server = axum_test::TestServer::new(build_router(state)).unwrap();

    let response = server.get("/api/meals").await;
    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UPSTREAM");
}
