//! matstats gateway
//!
//! - `POST /stats` : summary statistics over two matrices
//! - Ops endpoints: /healthz, /readyz, /metrics
//! - Config: optional matstats.yaml; `PORT` env var overrides the listen port

use tracing_subscriber::{fmt, EnvFilter};

use matstats_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default("matstats.yaml").expect("config load failed");
    let listen = cfg
        .gateway
        .listen_addr(std::env::var("PORT").ok().as_deref())
        .expect("gateway.listen must resolve to a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "matstats-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(drain_on_signal(state))
        .await
        .expect("server failed");
}

async fn drain_on_signal(state: app_state::AppState) {
    let _ = tokio::signal::ctrl_c().await;
    state.metrics().set_draining();
    tracing::info!("shutdown signal received, draining");
}
