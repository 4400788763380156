use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::intro::WIPE_MAX_RADIUS;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/folio/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Spring stiffness is positive and damping lies in (0, 1)
    /// - The settle radius and scroll sensitivity are within range
    /// - The frame interval is at least one millisecond
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splash = &self.splash;

        if !(splash.stiffness.is_finite() && splash.stiffness > 0.0) {
            return Err(invalid(format!(
                "splash.stiffness must be a positive number, got {}",
                splash.stiffness
            )));
        }

        if !(splash.damping > 0.0 && splash.damping < 1.0) {
            return Err(invalid(format!(
                "splash.damping must be between 0 and 1 (exclusive), got {}",
                splash.damping
            )));
        }

        if !(0.0..=WIPE_MAX_RADIUS).contains(&splash.wipe_open_radius) {
            return Err(invalid(format!(
                "splash.wipe_open_radius must be within 0..={}, got {}",
                WIPE_MAX_RADIUS, splash.wipe_open_radius
            )));
        }

        if !(splash.scroll_sensitivity.is_finite() && splash.scroll_sensitivity >= 0.0) {
            return Err(invalid(format!(
                "splash.scroll_sensitivity must be non-negative, got {}",
                splash.scroll_sensitivity
            )));
        }

        if self.ui.frame_interval_ms == 0 {
            return Err(invalid("ui.frame_interval_ms must be at least 1".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
