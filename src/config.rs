//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str =
    "https://o4kcv85fql.execute-api.us-east-1.amazonaws.com/Production/predict";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Classification endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout; there is no retry
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Terminal rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Width in characters of the longest bar
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_bar_width() -> usize {
    40
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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

    /// Standard config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("feedback-pulse").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here; this runs before the subscriber is installed,
    /// so the caller reports the source or the error.
    pub fn load_default() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file of `paths`. A file that exists but fails
    /// to load is an error, not a reason to try the next one.
    pub fn load_first(paths: &[PathBuf]) -> Result<(Self, ConfigSource), ConfigError> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                Ok((config, ConfigSource::File(path.clone())))
            }
            None => Ok((Self::from_env(), ConfigSource::Defaults)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("FEEDBACK_PULSE_ENDPOINT") {
            self.classifier.endpoint = endpoint;
        }
        if let Ok(timeout) = std::env::var("FEEDBACK_PULSE_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.classifier.timeout_secs = t;
            }
        }

        if let Ok(host) = std::env::var("FEEDBACK_PULSE_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("FEEDBACK_PULSE_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(level) = std::env::var("FEEDBACK_PULSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FEEDBACK_PULSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file found; defaults plus environment overrides
    Defaults,
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
    format!(
        r#"# Feedback Pulse Configuration
#
# Environment variables override these settings:
# - FEEDBACK_PULSE_ENDPOINT
# - FEEDBACK_PULSE_TIMEOUT_SECS
# - FEEDBACK_PULSE_API_HOST
# - FEEDBACK_PULSE_API_PORT
# - FEEDBACK_PULSE_LOG_LEVEL
# - FEEDBACK_PULSE_LOG_FORMAT

[classifier]
# Sentiment classification endpoint (POST {{"feedback": "..."}})
endpoint = "{endpoint}"

# Request timeout in seconds
timeout_secs = {timeout}

[api]
# API server host
host = "{host}"

# API server port
port = {port}

[view]
# Width of the longest bar in the terminal chart
bar_width = {bar_width}

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        endpoint = DEFAULT_ENDPOINT,
        timeout = default_timeout_secs(),
        host = default_host(),
        port = default_port(),
        bar_width = default_bar_width(),
    )
}
