use axum_test::TestServer;

use karai_testing::{MockBackend, MockBackendHandle};
use karai_web::config::WebConfig;
use karai_web::router::build_router;
use karai_web::state::AppState;

/// Spawn the mock backend, then build a gateway test server pointed at it.
pub async fn server_with_backend(backend: MockBackend) -> (TestServer, MockBackendHandle) {
    let handle = backend.spawn().await;
    let state = AppState::new(WebConfig::for_backend(&handle.base_url));
    let server = TestServer::new(build_router(state)).unwrap();
    (server, handle)
}
