#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for clay
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/clay/config.toml)
//! - Environment variables
//! - CLI flags
//!
//! It also loads distribution descriptors and renders built records.

pub mod descriptor;
pub mod output;

pub use descriptor::{
    load_descriptor, merge_env, merge_overrides, parse_descriptor, DESCRIPTOR_FILE,
};
pub use output::{render, OutputFormat};

use clay_errors::{ConfigError, Error};
use clay_types::ValidationPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub default_output: OutputFormat,
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("clay").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| read_error(&e, path))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            tracing::debug!("no config file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // CLAY_OUTPUT
        if let Ok(output) = std::env::var("CLAY_OUTPUT") {
            self.general.default_output = match output.as_str() {
                "toml" => OutputFormat::Toml,
                "json" => OutputFormat::Json,
                "yaml" | "yml" => OutputFormat::Yaml,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "CLAY_OUTPUT".to_string(),
                        value: output,
                    }
                    .into())
                }
            };
        }

        // CLAY_STRICT_STATUS
        if let Ok(strict) = std::env::var("CLAY_STRICT_STATUS") {
            self.validation.strict_status = match strict.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "CLAY_STRICT_STATUS".to_string(),
                        value: strict,
                    }
                    .into())
                }
            };
        }

        Ok(())
    }
}

/// Map a failed file read onto the error a user can act on
pub(crate) fn read_error(err: &std::io::Error, path: &Path) -> Error {
    match err.kind() {
        std::io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.display().to_string(),
        }
        .into(),
        std::io::ErrorKind::InvalidData => ConfigError::ParseError {
            message: format!("{}: file is not valid UTF-8", path.display()),
        }
        .into(),
        _ => Error::io_with_path(err, path),
    }
}
