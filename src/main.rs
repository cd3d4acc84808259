// Hopper - JSON document batch ingestion service
// Copyright (c) 2025 Hopper Contributors
// Licensed under the MIT License

use clap::Parser;
use hopper::cli::{Cli, Commands};
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
///
/// Each command initializes its own logging: `serve` and `ingest` use the
/// configuration file's logging settings, `validate-config` and `init` log
/// to the console only.
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let log_level = cli.log_level.as_deref();

    match &cli.command {
        Commands::Serve(args) => args.execute(&cli.config, log_level).await,
        Commands::Ingest(args) => args.execute(&cli.config, log_level).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config, log_level).await,
        Commands::Init(args) => args.execute(log_level).await,
    }
}
