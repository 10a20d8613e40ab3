//! GestureFlow Common Library
//!
//! This crate provides the GUI-independent core of GestureFlow:
//!
//! - [`gesture`] - Data model (`Gesture`, `Function`, `GestureDetection`)
//! - [`catalog`] - Built-in seed catalog of gestures and functions
//! - [`registry`] - Gesture registry and function mapping registry
//! - [`history`] - Bounded detection history and usage statistics
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod gesture;
pub mod history;
pub mod registry;

// Re-export commonly used types at the crate root
pub use catalog::Catalog;
pub use config::{
    FeedConfig, GestureFlowConfig, HistoryConfig, LogFormat, LoggingConfig, MappingConfig,
    default_config_path, load_config, parse_config,
};
pub use error::{EntityKind, Error, Result};
pub use gesture::{Function, Gesture, GestureDetection, current_timestamp_millis, display_name};
pub use history::{History, UsageEntry};
pub use registry::{FunctionRegistry, GestureRegistry};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
