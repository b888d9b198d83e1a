mod config;
mod contracts;
mod education;
mod errors;
mod form;
mod hedging;
mod market;
mod server;
mod state;

use crate::errors::DashboardResult;
use crate::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("oilseed hedging dashboard starting");

    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    let addr = cfg.bind_addr();
    let app_state = AppState::new(cfg);

    tracing::info!(
        archived_contracts = app_state.with_contracts(|b| b.history().len()).unwrap_or_default(),
        history = app_state.history.len(),
        dashboard_dir = %app_state.config.dashboard_dir.display(),
        "state initialised"
    );

    if let Err(e) = run_server(app_state, &addr).await {
        tracing::error!("server error on {addr}: {e}");
        std::process::exit(1);
    }

    tracing::info!("server stopped");
}

async fn run_server(state: Arc<AppState>, addr: &str) -> DashboardResult<()> {
    let app = server::build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
