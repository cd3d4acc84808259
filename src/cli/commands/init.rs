//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "hopper.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self, _log_level: Option<&str>) -> anyhow::Result<i32> {
        println!("📝 Initializing Hopper configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set use_mongodb to \"true\" or \"false\"");
                println!("  3. Create a .env file with your credentials:");
                println!("     - Set HOPPER_COSMOSDB_KEY (if using Cosmos DB)");
                println!("     - Set HOPPER_MONGODB_CONNECTION_STRING (if using MongoDB)");
                println!("  4. Validate configuration: hopper validate-config");
                println!("  5. Start the server: hopper serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Hopper Configuration File
# JSON document batch ingestion service
# Supports: Azure Cosmos DB or MongoDB

[application]
log_level = "info"

[server]
bind = "0.0.0.0:7071"

[store]
# Backend selection flag: "true" selects MongoDB, "false" selects Cosmos DB
use_mongodb = "false"
database = "inventory"
collection = "items"

# Choose ONE backend section based on use_mongodb above

[cosmosdb]
endpoint = "https://your-account.documents.azure.com:443/"
key = "${HOPPER_COSMOSDB_KEY}"
partition_key = "/id"

# [mongodb]
# connection_string = "${HOPPER_MONGODB_CONNECTION_STRING}"

[logging]
local_enabled = true
local_path = "/var/log/hopper"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Hopper Configuration File
# JSON document batch ingestion service
#
# This file contains all configuration options with examples and explanations.
#
# Hopper supports two storage backends:
#   - Azure Cosmos DB (documents inserted one at a time; a rejected document
#     is logged and skipped, the rest of the batch is still attempted)
#   - MongoDB (whole batch inserted in one call; all-or-nothing)
#
# Choose your backend by setting store.use_mongodb below.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# HTTP Server Settings
# ============================================================================
[server]
# Socket address the ingestion endpoint binds to
bind = "0.0.0.0:7071"

# ============================================================================
# Store Selection
# ============================================================================
[store]
# Backend selection flag (must parse as a boolean):
#   "true"  -> MongoDB
#   "false" -> Cosmos DB
use_mongodb = "false"

# Database documents are inserted into
database = "inventory"

# Collection (Cosmos DB container) documents are inserted into
collection = "items"

# ============================================================================
# Backend Configuration
# Choose ONE backend section based on store.use_mongodb above
# ============================================================================

# ----------------------------------------------------------------------------
# Option 1: Azure Cosmos DB
# ----------------------------------------------------------------------------
[cosmosdb]
# Cosmos DB account endpoint URL
endpoint = "https://your-account.documents.azure.com:443/"

# Cosmos DB primary key (use environment variable)
key = "${HOPPER_COSMOSDB_KEY}"

# Partition key path for created containers (single top-level path).
# Documents without a string "id" get a generated UUID, so the default
# "/id" works for any batch.
partition_key = "/id"

# ----------------------------------------------------------------------------
# Option 2: MongoDB
# ----------------------------------------------------------------------------
# Uncomment this section if using MongoDB (use_mongodb = "true")
#
# [mongodb]
# # Connection string format: mongodb://[user[:password]@]host[:port] or mongodb+srv://...
# connection_string = "${HOPPER_MONGODB_CONNECTION_STRING}"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging
local_enabled = true

# Local log file path
local_path = "/var/log/hopper"

# Log rotation (daily or size)
local_rotation = "daily"

# Maximum log file size in MB
local_max_size_mb = 100
"#
        .to_string()
    }
}
