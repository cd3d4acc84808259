//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{CosmosDbConfig, HopperConfig, MongoDbConfig};
use super::secret::secret_string;
use crate::domain::errors::IngestError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HopperConfig
/// 4. Applies environment variable overrides (HOPPER_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use hopper::config::loader::load_config;
///
/// let config = load_config("hopper.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HopperConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(IngestError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        IngestError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: HopperConfig = toml::from_str(&contents)
        .map_err(|e| IngestError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        IngestError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Process non-comment lines for env var substitution
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(IngestError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the HOPPER_* prefix
///
/// Environment variables follow the pattern: HOPPER_<SECTION>_<KEY>
/// For example: HOPPER_STORE_USE_MONGODB, HOPPER_COSMOSDB_ENDPOINT
///
/// A `[cosmosdb]` or `[mongodb]` section that is absent from the TOML file is
/// created when its required variables are present, so a deployment can be
/// configured entirely through the environment.
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut HopperConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("HOPPER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Server overrides
    if let Ok(val) = std::env::var("HOPPER_SERVER_BIND") {
        config.server.bind = val;
    }

    // Store overrides
    if let Ok(val) = std::env::var("HOPPER_STORE_USE_MONGODB") {
        config.store.use_mongodb = val;
    }
    if let Ok(val) = std::env::var("HOPPER_STORE_DATABASE") {
        config.store.database = val;
    }
    if let Ok(val) = std::env::var("HOPPER_STORE_COLLECTION") {
        config.store.collection = val;
    }

    // Cosmos DB overrides
    match config.cosmosdb {
        Some(ref mut cosmos) => {
            if let Ok(val) = std::env::var("HOPPER_COSMOSDB_ENDPOINT") {
                cosmos.endpoint = val;
            }
            if let Ok(val) = std::env::var("HOPPER_COSMOSDB_KEY") {
                cosmos.key = secret_string(val);
            }
            if let Ok(val) = std::env::var("HOPPER_COSMOSDB_PARTITION_KEY") {
                cosmos.partition_key = val;
            }
        }
        None => {
            if let (Ok(endpoint), Ok(key)) = (
                std::env::var("HOPPER_COSMOSDB_ENDPOINT"),
                std::env::var("HOPPER_COSMOSDB_KEY"),
            ) {
                config.cosmosdb = Some(CosmosDbConfig {
                    endpoint,
                    key: secret_string(key),
                    partition_key: std::env::var("HOPPER_COSMOSDB_PARTITION_KEY")
                        .unwrap_or_else(|_| super::schema::default_partition_key()),
                });
            }
        }
    }

    // MongoDB overrides
    match config.mongodb {
        Some(ref mut mongo) => {
            if let Ok(val) = std::env::var("HOPPER_MONGODB_CONNECTION_STRING") {
                mongo.connection_string = secret_string(val);
            }
        }
        None => {
            if let Ok(val) = std::env::var("HOPPER_MONGODB_CONNECTION_STRING") {
                config.mongodb = Some(MongoDbConfig {
                    connection_string: secret_string(val),
                });
            }
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("HOPPER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("HOPPER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
