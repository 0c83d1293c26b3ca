use std::net::SocketAddr;

use anyhow::Context;
use ekz_api::{app, observability::init_logging, AppState};
use ekz_store::{CatalogState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;
    init_logging(config.logging.format);
    tracing::info!("Starting EKZ vendor API on port {}", config.server.port);

    // All data is read here, before the listener is bound
    let catalog = CatalogState::load(&config.data);
    if catalog.load_report().is_degraded() {
        tracing::warn!("Some data files failed to load; affected endpoints return empty data");
    }

    let allowed: Vec<i64> = config.vendors.allowed_ids.ids().collect();
    tracing::info!(?allowed, "Vendor allow-list");

    let app_state = AppState::new(
        catalog,
        config.vendors.allowed_ids.clone(),
        config.auth.api_key.clone(),
    );
    let app = app(app_state);

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
