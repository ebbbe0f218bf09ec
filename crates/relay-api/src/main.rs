//! `tutor-relay` entry point.
//!
//! Loads `.env`, parses CLI flags, assembles configuration, resolves the
//! provider credential (fatal if missing), then serves `POST /api/chat`
//! until Ctrl+C or SIGTERM.

use anyhow::Context;
use clap::Parser;

use relay_api::cli::Cli;
use relay_api::http::router::build_router;
use relay_api::state::AppState;
use relay_infra::config::load_relay_config;
use relay_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Populate the environment first so clap's env fallbacks see .env values.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = load_relay_config(cli.config.as_deref()).await?;
    cli.apply_overrides(&mut config);

    let state = AppState::init(&config)
        .await
        .inspect_err(|e| tracing::error!("startup aborted: {e:#}"))?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Relay listening on http://{addr}");
    tracing::info!(model = %config.model, "Model configured");
    tracing::info!("Endpoint: POST /api/chat");

    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    shutdown_tracing();

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
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
                tracing::error!("failed to install SIGTERM handler: {e}");
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
