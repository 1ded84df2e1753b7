//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::data::DEFAULT_TITLES;
use crate::error::DashboardResult;
use crate::live::{
    ACTIVITY_INTERVAL, DEFAULT_FEED_CAPACITY, GAUGE_INTERVAL, INITIAL_ACTIVITY, REGION_INTERVAL,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub live: LiveConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Synthetic data generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Title pool for the catalog
    #[serde(default = "default_titles")]
    pub titles: Vec<String>,
}

fn default_titles() -> Vec<String> {
    DEFAULT_TITLES.iter().map(|t| t.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            titles: default_titles(),
        }
    }
}

/// Live loop timing and sizes
#[derive(Debug, Clone, Deserialize)]
pub struct LiveConfig {
    #[serde(default = "default_clock_interval")]
    pub clock_interval_ms: u64,

    #[serde(default = "default_region_interval")]
    pub region_interval_ms: u64,

    #[serde(default = "default_activity_interval")]
    pub activity_interval_ms: u64,

    #[serde(default = "default_gauge_interval")]
    pub gauge_interval_ms: u64,

    #[serde(default = "default_feed_capacity")]
    pub feed_capacity: usize,

    #[serde(default = "default_initial_activity")]
    pub initial_activity: usize,
}

fn default_clock_interval() -> u64 {
    1000
}

fn default_region_interval() -> u64 {
    REGION_INTERVAL.as_millis() as u64
}

fn default_activity_interval() -> u64 {
    ACTIVITY_INTERVAL.as_millis() as u64
}

fn default_gauge_interval() -> u64 {
    GAUGE_INTERVAL.as_millis() as u64
}

fn default_feed_capacity() -> usize {
    DEFAULT_FEED_CAPACITY
}

fn default_initial_activity() -> usize {
    INITIAL_ACTIVITY
}

impl LiveConfig {
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn region_interval(&self) -> Duration {
        Duration::from_millis(self.region_interval_ms)
    }

    pub fn activity_interval(&self) -> Duration {
        Duration::from_millis(self.activity_interval_ms)
    }

    pub fn gauge_interval(&self) -> Duration {
        Duration::from_millis(self.gauge_interval_ms)
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval(),
            region_interval_ms: default_region_interval(),
            activity_interval_ms: default_activity_interval(),
            gauge_interval_ms: default_gauge_interval(),
            feed_capacity: default_feed_capacity(),
            initial_activity: default_initial_activity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Settings for one run: the given file (or the default search), then a
    /// seed given on the command line
    pub fn resolve(path: Option<&Path>, seed: Option<u64>) -> DashboardResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_with_env(path)?,
            None => Self::load_default(),
        };
        if let Some(seed) = seed {
            config.generator.seed = Some(seed);
        }
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("streamdash").join("config.toml")),
            Some(PathBuf::from("/etc/streamdash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(seed) = std::env::var("STREAMDASH_SEED") {
            if let Ok(s) = seed.parse() {
                self.generator.seed = Some(s);
            }
        }

        if let Ok(capacity) = std::env::var("STREAMDASH_FEED_CAPACITY") {
            if let Ok(c) = capacity.parse() {
                self.live.feed_capacity = c;
            }
        }

        if let Ok(level) = std::env::var("STREAMDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STREAMDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Streamdash Configuration
#
# Environment variables override these settings:
# - STREAMDASH_SEED
# - STREAMDASH_FEED_CAPACITY
# - STREAMDASH_LOG_LEVEL
# - STREAMDASH_LOG_FORMAT

[generator]
# Fixed seed for reproducible dashboards (omit for a fresh one each run)
# seed = 42

# Catalog title pool (omit to use the built-in list)
# titles = ["Stranger Things", "The Crown", "Dark"]

[live]
# Header clock refresh (ms)
clock_interval_ms = 1000

# Region map drift (ms)
region_interval_ms = 5000

# Activity feed event (ms)
activity_interval_ms = 3000

# Real-time gauges (ms)
gauge_interval_ms = 2000

# Events kept in the activity feed
feed_capacity = 10

# Events synthesized when the feed starts
initial_activity = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
