use tracing::info;

use karai_web::config::WebConfig;
use karai_web::router::build_router;
use karai_web::state::AppState;

#[tokio::main]
async fn main() {
    karai_core::tracing::init_tracing();

    let config = WebConfig::from_env();
    let state = AppState::new(config.clone());

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.web_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("web gateway listening on {addr}, backend at {}", config.backend_url);
    axum::serve(listener, router).await.expect("server error");
}
