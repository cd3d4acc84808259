//! Structured logging setup using tracing
//!
//! Hopper logs to the console always, and to a JSON rolling file when the
//! `[logging]` section enables it. The log stream is part of the service's
//! contract: per-document insert failures appear only here, never in the
//! HTTP response.
//!
//! # Example
//!
//! ```no_run
//! use hopper::logging::init_logging;
//! use hopper::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{IngestError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Keeps the non-blocking file writer alive; drop it and buffered log
/// lines are lost
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system based on configuration
///
/// The level from configuration (or the `--log-level` override) becomes the
/// default filter directive `hopper={level}`; a `RUST_LOG` environment
/// variable takes precedence when set. Returns a [`LoggingGuard`] that must
/// be kept alive for the duration of the program.
///
/// # Errors
///
/// Returns a configuration error for an unknown level name, or when the log
/// directory cannot be created.
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let directive = level_directive(log_level_str)?;
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive.clone()))
    };

    let mut layers = vec![console_layer(filter())];

    let file_guard = if config.local_enabled {
        let (layer, guard) = file_layer(config, filter())?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(layers).init();

    tracing::info!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard { _file_guard: file_guard })
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Human-readable console output, always on
fn console_layer(filter: EnvFilter) -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter)
        .boxed()
}

/// JSON lines into a rolling `hopper.log` under the configured directory
fn file_layer(config: &LoggingConfig, filter: EnvFilter) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        IngestError::Configuration(format!(
            "Failed to create log directory {}: {}",
            config.local_path, e
        ))
    })?;

    // tracing-appender has no size-based rotation; "size" rolls daily too
    // and relies on the max-size setting being enforced by log shipping
    let rotation = match config.local_rotation.as_str() {
        "daily" | "size" => Rotation::DAILY,
        _ => Rotation::DAILY,
    };

    let appender = RollingFileAppender::new(rotation, &config.local_path, "hopper.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();

    Ok((layer, guard))
}

/// Map a configured level name to the default filter directive
fn level_directive(level_str: &str) -> Result<String> {
    match level_str.to_lowercase().as_str() {
        level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(format!("hopper={level}")),
        other => Err(IngestError::Configuration(format!(
            "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
