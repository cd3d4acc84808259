//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Hopper configuration file.

use crate::config::load_config;
use crate::domain::BackendKind;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str, _log_level: Option<&str>) -> anyhow::Result<i32> {
        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration (includes backend-independent validation)
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Bind Address: {}", config.server.bind);
        println!("  Database: {}", config.store.database);
        println!("  Collection: {}", config.store.collection);

        // The flag and the backend sections are normally resolved per
        // request; resolving them here surfaces a misdeployment before the
        // first request hits it.
        match BackendKind::from_flag(&config.store.use_mongodb) {
            Ok(BackendKind::CosmosDb) => {
                println!("  Backend: CosmosDB (per-document inserts)");
                match &config.cosmosdb {
                    Some(cosmos) => match cosmos.validate() {
                        Ok(()) => {
                            println!("  Cosmos DB Endpoint: {}", cosmos.endpoint);
                            println!("  Partition Key: {}", cosmos.partition_key);
                        }
                        Err(e) => {
                            println!();
                            println!("❌ [cosmosdb] section is invalid");
                            println!("   Error: {e}");
                            return Ok(2);
                        }
                    },
                    None => {
                        println!();
                        println!("❌ [cosmosdb] section is missing");
                        println!("   use_mongodb = \"false\" requires a [cosmosdb] section");
                        return Ok(2);
                    }
                }
            }
            Ok(BackendKind::MongoDb) => {
                println!("  Backend: MongoDB (whole-batch inserts)");
                match &config.mongodb {
                    Some(mongo) => match mongo.validate() {
                        Ok(()) => {
                            use secrecy::ExposeSecret;
                            // Show only the host part, never credentials
                            println!(
                                "  MongoDB Host: {}",
                                mongo
                                    .connection_string
                                    .expose_secret()
                                    .as_ref()
                                    .split('@')
                                    .next_back()
                                    .unwrap_or("***")
                            );
                        }
                        Err(e) => {
                            println!();
                            println!("❌ [mongodb] section is invalid");
                            println!("   Error: {e}");
                            return Ok(2);
                        }
                    },
                    None => {
                        println!();
                        println!("❌ [mongodb] section is missing");
                        println!("   use_mongodb = \"true\" requires a [mongodb] section");
                        return Ok(2);
                    }
                }
            }
            Err(e) => {
                println!();
                println!("❌ Backend selection flag is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        }

        println!();
        println!("✅ Configuration is valid");
        println!();
        Ok(0)
    }
}
