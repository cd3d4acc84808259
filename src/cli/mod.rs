//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Hopper using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Hopper - JSON document batch ingestion service
#[derive(Parser, Debug)]
#[command(name = "hopper")]
#[command(version, about, long_about = None)]
#[command(author = "Hopper Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "hopper.toml", env = "HOPPER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HOPPER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP ingestion server
    Serve(commands::serve::ServeArgs),

    /// Ingest a JSON batch from a file or stdin
    Ingest(commands::ingest::IngestArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["hopper", "serve"]);
        assert_eq!(cli.config, "hopper.toml");
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["hopper", "--config", "custom.toml", "serve"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["hopper", "--log-level", "debug", "serve"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_ingest() {
        let cli = Cli::parse_from(["hopper", "ingest", "--file", "batch.json"]);
        assert!(matches!(cli.command, Commands::Ingest(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["hopper", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["hopper", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
