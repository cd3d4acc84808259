//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use hopper::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("HOPPER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("HOPPER_SERVER_BIND");
    std::env::remove_var("HOPPER_STORE_USE_MONGODB");
    std::env::remove_var("HOPPER_STORE_DATABASE");
    std::env::remove_var("HOPPER_STORE_COLLECTION");
    std::env::remove_var("HOPPER_COSMOSDB_ENDPOINT");
    std::env::remove_var("HOPPER_COSMOSDB_KEY");
    std::env::remove_var("HOPPER_COSMOSDB_PARTITION_KEY");
    std::env::remove_var("HOPPER_MONGODB_CONNECTION_STRING");
    std::env::remove_var("TEST_HOPPER_COSMOS_KEY");
    std::env::remove_var("TEST_HOPPER_MONGO_URI");
}

fn write_config(toml_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[server]
bind = "127.0.0.1:8080"

[store]
use_mongodb = "false"
database = "inventory"
collection = "items"

[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "test-key-12345"
partition_key = "/sku"

[mongodb]
connection_string = "mongodb://localhost:27017"

[logging]
local_enabled = false
local_path = "/tmp/hopper"
local_rotation = "size"
local_max_size_mb = 50
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify application config
    assert_eq!(config.application.log_level, "debug");

    // Verify server config
    assert_eq!(config.server.bind, "127.0.0.1:8080");

    // Verify store config
    assert_eq!(config.store.use_mongodb, "false");
    assert_eq!(config.store.database, "inventory");
    assert_eq!(config.store.collection, "items");

    // Verify Cosmos DB config
    let cosmos = config.cosmosdb.as_ref().expect("cosmosdb section");
    assert_eq!(cosmos.endpoint, "https://test.documents.azure.com:443/");
    assert_eq!(cosmos.key.expose_secret(), "test-key-12345");
    assert_eq!(cosmos.partition_key, "/sku");

    // Verify MongoDB config
    let mongo = config.mongodb.as_ref().expect("mongodb section");
    assert_eq!(
        mongo.connection_string.expose_secret(),
        "mongodb://localhost:27017"
    );

    // Verify logging config
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/hopper");
    assert_eq!(config.logging.local_rotation, "size");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[store]
use_mongodb = "true"
database = "inventory"
collection = "items"

[mongodb]
connection_string = "mongodb://localhost:27017"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.server.bind, "0.0.0.0:7071");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/var/log/hopper");
    assert_eq!(config.logging.local_rotation, "daily");
    assert_eq!(config.logging.local_max_size_mb, 100);
    assert!(config.cosmosdb.is_none());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_HOPPER_COSMOS_KEY", "secret_key");

    let temp_file = write_config(
        r#"
[store]
use_mongodb = "false"
database = "inventory"
collection = "items"

[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "${TEST_HOPPER_COSMOS_KEY}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    let cosmos = config.cosmosdb.as_ref().expect("cosmosdb section");
    assert_eq!(cosmos.key.expose_secret(), "secret_key");
    // Default partition key applies when the file omits it
    assert_eq!(cosmos.partition_key, "/id");

    std::env::remove_var("TEST_HOPPER_COSMOS_KEY");
}

#[test]
fn test_missing_env_var_fails_load() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[store]
use_mongodb = "false"
database = "inventory"
collection = "items"

[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "${TEST_HOPPER_COSMOS_KEY}"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err
        .to_string()
        .contains("Missing required environment variables"));
    assert!(err.to_string().contains("TEST_HOPPER_COSMOS_KEY"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("HOPPER_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("HOPPER_STORE_USE_MONGODB", "true");
    std::env::set_var("HOPPER_STORE_DATABASE", "overridden_db");

    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[store]
use_mongodb = "false"
database = "inventory"
collection = "items"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.store.use_mongodb, "true");
    assert_eq!(config.store.database, "overridden_db");
    // Untouched values keep their file settings
    assert_eq!(config.store.collection, "items");

    cleanup_env_vars();
}

#[test]
fn test_env_only_backend_section() {
    // A [mongodb] section absent from the file is created from the
    // environment, so a deployment can keep credentials out of the file
    // entirely.
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var(
        "HOPPER_MONGODB_CONNECTION_STRING",
        "mongodb://env-host:27017",
    );

    let temp_file = write_config(
        r#"
[store]
use_mongodb = "true"
database = "inventory"
collection = "items"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    let mongo = config.mongodb.as_ref().expect("mongodb section from env");
    assert_eq!(
        mongo.connection_string.expose_secret(),
        "mongodb://env-host:27017"
    );

    cleanup_env_vars();
}

#[test]
fn test_invalid_backend_flag_still_loads() {
    // The flag is resolved per request, so an unparseable value must load
    // fine and be rejected when a request selects its backend.
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[store]
use_mongodb = "maybe"
database = "inventory"
collection = "items"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.store.use_mongodb, "maybe");
}

#[test]
fn test_missing_store_section_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "info"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_empty_store_names_fail_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[store]
use_mongodb = "false"
database = ""
collection = "items"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));
    assert!(err.to_string().contains("store.database"));
}

#[test]
fn test_invalid_bind_address_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[server]
bind = "not-an-address"

[store]
use_mongodb = "false"
database = "inventory"
collection = "items"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("server.bind"));
}

#[test]
fn test_commented_placeholders_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    // The ${VAR} in the comment must not be treated as required
    let temp_file = write_config(
        r#"
[store]
use_mongodb = "true"
database = "inventory"
collection = "items"

# [mongodb]
# connection_string = "${TEST_HOPPER_MONGO_URI}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert!(config.mongodb.is_none());
}
