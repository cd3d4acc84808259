//! Serve command implementation
//!
//! This module implements the `serve` command that runs the HTTP
//! ingestion server.

use crate::api::start_server;
use crate::config::load_config;
use crate::logging::init_logging;
use clap::Args;
use std::net::SocketAddr;
use std::sync::Arc;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the socket address to bind (e.g. 0.0.0.0:7071)
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        log_level: Option<&str>,
    ) -> anyhow::Result<i32> {
        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }

        let addr: SocketAddr = match config.server.bind.parse() {
            Ok(addr) => addr,
            Err(e) => {
                eprintln!("Invalid bind address '{}': {e}", config.server.bind);
                return Ok(2);
            }
        };

        // Initialize logging from configuration
        let level = log_level.unwrap_or(&config.application.log_level).to_string();
        let _guard = match init_logging(&level, &config.logging) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            use_mongodb = %config.store.use_mongodb,
            database = %config.store.database,
            collection = %config.store.collection,
            "Hopper - JSON document batch ingestion service"
        );

        println!("🚀 Hopper listening on http://{addr}");

        // Run until a shutdown signal arrives
        start_server(addr, Arc::new(config), shutdown_signal()).await?;

        println!("✅ Server stopped");
        Ok(0)
    }
}

/// Resolves when SIGINT or SIGTERM is received
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to create SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT (Ctrl+C), shutting down...");
                println!("\n⚠️  Shutdown signal received, finishing in-flight requests...");
            }
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, shutting down...");
                println!("\n⚠️  Shutdown signal received, finishing in-flight requests...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        } else {
            tracing::info!("Received SIGINT (Ctrl+C), shutting down...");
            println!("\n⚠️  Shutdown signal received, finishing in-flight requests...");
        }
    }
}
