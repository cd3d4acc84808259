//! Ingest command implementation
//!
//! This module implements the `ingest` command that runs one batch through
//! the ingestion pipeline from the command line, without the HTTP server.

use crate::config::load_config;
use crate::core::ingest::IngestCoordinator;
use crate::logging::init_logging;
use clap::Args;
use std::io::Read;
use std::sync::Arc;

/// Arguments for the ingest command
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Path to a JSON file containing the document batch ("-" or omitted reads stdin)
    #[arg(short, long)]
    pub file: Option<String>,
}

impl IngestArgs {
    /// Execute the ingest command
    ///
    /// The batch goes through exactly the same pipeline as an HTTP request;
    /// the exit code takes the place of the response status.
    pub async fn execute(&self, config_path: &str, log_level: Option<&str>) -> anyhow::Result<i32> {
        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
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

        // Read the batch
        let raw = match self.read_batch() {
            Ok(raw) => raw,
            Err(e) => {
                println!("❌ Failed to read input");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        let coordinator = IngestCoordinator::new(Arc::new(config));

        match coordinator.run(&raw).await {
            Ok(report) => {
                println!("✅ {}", report.message());
                Ok(0)
            }
            Err(e) if e.is_request_error() => {
                println!("❌ Batch rejected");
                println!("   Error: {e}");
                Ok(2)
            }
            Err(e) => {
                println!("❌ Ingestion failed");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Read the raw batch from the configured file or stdin
    fn read_batch(&self) -> std::io::Result<Vec<u8>> {
        match self.file.as_deref() {
            Some("-") | None => {
                let mut buffer = Vec::new();
                std::io::stdin().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
            Some(path) => std::fs::read(path),
        }
    }
}
