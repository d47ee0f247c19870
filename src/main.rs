use tokio::{signal, sync::watch};
use tracing::info;

use pipeline_demo::{
    config::AppConfig, http::http_server::start_http_server, utils::logging::setup_logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::new()?;
    let _guards = setup_logging(&config)?;
    info!(
        "⚙️ Loaded configuration | http: {}, debug: {}",
        config.http.bind_addr(),
        config.debug
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(());

    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if signal::ctrl_c().await.is_ok() {
                info!("🛑 Received Ctrl+C. Triggering shutdown...");
                let _ = shutdown_tx.send(());
            }
        }
    });

    let server = start_http_server(config, shutdown_rx).await?;

    let result = match server.await {
        Ok(res) => res,
        Err(join_err) => Err(join_err.into()),
    };

    if let Err(e) = result {
        tracing::error!("💥 Server crashed: {:?}", e);
        let _ = shutdown_tx.send(());
        return Err(e);
    }

    Ok(())
}
