//! # Configuration
//!
//! Codec policy and logging configuration for the inspector binary.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `SBE_CODEC_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SBE_CODEC_CONFIG_FILE` | Path of the TOML file | `sbe-codec.toml` |
//! | `SBE_CODEC_RANGE_CHECK_ON_ENCODE` | Range-check before encoding | `true` |
//! | `SBE_CODEC_RANGE_CHECK_ON_DECODE` | Range-check after decoding | `false` |
//! | `SBE_CODEC_LOG_LEVEL` | Log level | `info` |
//! | `SBE_CODEC_LOG_FORMAT` | Log format (json/pretty) | `json` |
//!
//! # Examples
//!
//! ```ignore
//! use sbe_codec::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("range check on decode: {}", config.codec.range_check_on_decode);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::sbe::CodecOptions;

const CONFIG_FILE_VAR: &str = "SBE_CODEC_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "sbe-codec.toml";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Range-check policy for framed encode and decode.
    #[serde(default)]
    pub codec: CodecOptions,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path =
            std::env::var(CONFIG_FILE_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML or mistyped values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Codec configuration
        if let Some(value) = lookup("SBE_CODEC_RANGE_CHECK_ON_ENCODE")
            && let Ok(enabled) = value.parse()
        {
            self.codec.range_check_on_encode = enabled;
        }
        if let Some(value) = lookup("SBE_CODEC_RANGE_CHECK_ON_DECODE")
            && let Ok(enabled) = value.parse()
        {
            self.codec.range_check_on_decode = enabled;
        }

        // Logging configuration
        if let Some(level) = lookup("SBE_CODEC_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = lookup("SBE_CODEC_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, VALID_LOG_LEVELS
                ),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_log_level() -> String {
    "info".to_string()
}
