use crate::{config::AppConfig, http::routes::create_routes, state::AppState};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::watch, task::JoinHandle};
use tracing::info;

pub type ServerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub async fn start_http_server(
    config: AppConfig,
    shutdown_rx: watch::Receiver<()>,
) -> Result<JoinHandle<ServerResult>, Box<dyn std::error::Error + Send + Sync>> {
    let http_addr = config.http.bind_addr();
    let listener = TcpListener::bind(http_addr).await?;

    let app_state = Arc::new(AppState::new(config));

    let http_server = tokio::spawn(run_http_server(listener, shutdown_rx, app_state));

    Ok(http_server)
}

pub async fn run_http_server(
    listener: TcpListener,
    mut shutdown_rx: watch::Receiver<()>,
    app_state: Arc<AppState>,
) -> ServerResult {
    info!(
        "🚀 Starting {} on {:?}",
        app_state.config.logging.service,
        listener.local_addr()?
    );
    let app = create_routes(app_state);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.ok();
            info!("🚦 Gracefully shutting down all connections");
        })
        .await?;

    Ok(())
}
