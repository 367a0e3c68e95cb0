//! `medgate serve` -- run the HTTP prediction service.
//!
//! Loads configuration, wires the risk policy and metrics collector into
//! the API router, binds the listener, and serves until Ctrl+C triggers a
//! graceful shutdown.
//!
//! # Example
//!
//! ```text
//! medgate serve
//! medgate serve --config /path/to/config.json
//! medgate serve --host 127.0.0.1 --port 8080
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::info;

use medgate_core::{AgeThresholdPolicy, RequestMetrics};
use medgate_server::{ApiState, build_router};
use medgate_types::config::Config;

/// Arguments for the `medgate serve` subcommand.
#[derive(Args)]
pub struct ServeArgs {
    /// Config file path (overrides auto-discovery).
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bind address (overrides config).
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides config).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Resolve the effective config from file plus CLI overrides.
pub fn resolve_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut config = Config::load(args.config.as_deref().map(Path::new))
        .context("failed to load config")?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Overrides can invalidate a previously valid config.
    config.validate().context("invalid effective config")?;
    Ok(config)
}

/// Run the serve command.
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    info!("starting medgate prediction service");

    let config = resolve_config(&args)?;

    let state = ApiState {
        policy: Arc::new(AgeThresholdPolicy::from_config(&config.model)),
        metrics: Arc::new(RequestMetrics::new()),
        model_version: config.model.version.clone(),
    };
    let router = build_router(state, &config.server.cors_origins);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(model_version = %config.model.version, "risk policy initialized");
    info!("endpoints:");
    info!("   GET  /         - liveness greeting");
    info!("   POST /predict  - risk prediction");
    info!("   GET  /metrics  - request metrics");
    info!("   GET  /health   - health check");
    info!(addr = %bind_addr, "service running -- press Ctrl+C to stop");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("service shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("received shutdown signal");
}
