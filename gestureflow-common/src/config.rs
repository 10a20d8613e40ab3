use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::history::{DEFAULT_CAPACITY, DEFAULT_RECENT_LIMIT};

/// Simulated detection feed settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Milliseconds between emitted detections once connected.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Milliseconds spent in the connecting state after start.
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,

    /// Fixed RNG seed for a reproducible feed (random if absent).
    #[serde(default)]
    pub seed: Option<u64>,

    /// Gesture ids the simulator picks from.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,

    /// Whether a "no gesture" sample is one of the candidates.
    #[serde(default = "default_true")]
    pub include_none: bool,

    /// When false, connecting ends in the camera error state.
    #[serde(default = "default_true")]
    pub camera_available: bool,
}

fn default_tick_interval_ms() -> u64 {
    2000
}

fn default_connect_delay_ms() -> u64 {
    1500
}

fn default_candidates() -> Vec<String> {
    ["swipe_left", "swipe_right", "pinch", "zoom"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            connect_delay_ms: default_connect_delay_ms(),
            seed: None,
            candidates: default_candidates(),
            include_none: true,
            camera_available: true,
        }
    }
}

/// Detection history settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of retained detections.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Number of detections shown as recent activity.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// Function mapping settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Reject bindings to gesture ids missing from the registry.
    #[serde(default)]
    pub validate_bindings: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Complete GestureFlow configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureFlowConfig {
    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub mapping: MappingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Replacement seed catalog (the built-in one if absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,
}

impl GestureFlowConfig {
    /// The catalog the registries should be seeded from.
    pub fn catalog(&self) -> &Catalog {
        self.catalog.as_ref().unwrap_or(Catalog::builtin())
    }

    /// Check value ranges and the custom catalog, if any.
    pub fn validate(&self) -> Result<()> {
        if self.feed.tick_interval_ms == 0 {
            return Err(Error::Config(
                "feed.tick_interval_ms must be greater than zero".to_string(),
            ));
        }

        if self.feed.candidates.is_empty() && !self.feed.include_none {
            return Err(Error::Config(
                "feed.candidates cannot be empty when include_none is false".to_string(),
            ));
        }

        if self.history.capacity == 0 {
            return Err(Error::Config(
                "history.capacity must be greater than zero".to_string(),
            ));
        }

        if self.history.recent_limit > self.history.capacity {
            return Err(Error::Config(format!(
                "history.recent_limit ({}) cannot exceed history.capacity ({})",
                self.history.recent_limit, self.history.capacity
            )));
        }

        if let Some(catalog) = &self.catalog {
            catalog.validate()?;
        }

        Ok(())
    }
}

/// Default configuration file location (`<config dir>/gestureflow/config.json5`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gestureflow").join("config.json5"))
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: GestureFlowConfig = parse_config("{}").unwrap();

        assert_eq!(config.feed.tick_interval_ms, 2000);
        assert_eq!(config.feed.connect_delay_ms, 1500);
        assert_eq!(config.feed.seed, None);
        assert_eq!(
            config.feed.candidates,
            vec!["swipe_left", "swipe_right", "pinch", "zoom"]
        );
        assert!(config.feed.include_none);
        assert!(config.feed.camera_available);
        assert_eq!(config.history.capacity, 10);
        assert_eq!(config.history.recent_limit, 5);
        assert!(!config.mapping.validate_bindings);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(std::ptr::eq(config.catalog(), Catalog::builtin()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let json5 = r#"
        {
            feed: {
                tick_interval_ms: 500,
                connect_delay_ms: 0,
                seed: 42,
                candidates: ["pinch"],
                include_none: false,
                camera_available: false,
            },
            history: { capacity: 20, recent_limit: 8 },
            mapping: { validate_bindings: true },
            logging: { level: "debug", format: "json" },
            catalog: {
                gestures: [{ id: "pinch", name: "Pinch" }],
                functions: [{ id: "mute", name: "Mute", assigned_gesture: "pinch" }],
            },
        }
        "#;

        let config: GestureFlowConfig = parse_config(json5).unwrap();

        assert_eq!(config.feed.tick_interval_ms, 500);
        assert_eq!(config.feed.seed, Some(42));
        assert!(!config.feed.camera_available);
        assert_eq!(config.history.capacity, 20);
        assert!(config.mapping.validate_bindings);
        assert_eq!(config.logging.format, LogFormat::Json);

        let catalog = config.catalog();
        assert_eq!(catalog.gestures.len(), 1);
        assert!(catalog.gestures[0].is_active);
        assert_eq!(
            catalog.functions[0].assigned_gesture.as_deref(),
            Some("pinch")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = GestureFlowConfig::default();
        config.feed.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = GestureFlowConfig::default();
        config.history.recent_limit = 11;
        assert!(config.validate().is_err());

        let mut config = GestureFlowConfig::default();
        config.feed.candidates.clear();
        config.feed.include_none = false;
        assert!(config.validate().is_err());

        let config: GestureFlowConfig = parse_config(
            r#"{ catalog: { gestures: [{ id: "a", name: "A" }, { id: "a", name: "B" }] } }"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = parse_config::<GestureFlowConfig>("{ feed: ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config::<GestureFlowConfig>("/nonexistent/gestureflow.json5").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
