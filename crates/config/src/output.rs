//! Serialized output of built records

use clay_errors::{ConfigError, Error};
use clay_types::DistributionManagement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document format a record is rendered to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl clap::ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Toml, Self::Json, Self::Yaml]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Toml => clap::builder::PossibleValue::new("toml"),
            Self::Json => clap::builder::PossibleValue::new("json"),
            Self::Yaml => clap::builder::PossibleValue::new("yaml").alias("yml"),
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serialize `management` in the requested format
///
/// Location metadata is not part of the output. TOML output uses the POM
/// element names (`downloadUrl`), which `parse_descriptor` also accepts.
///
/// # Errors
///
/// Returns `ConfigError::SerializeError` if the serializer rejects the record.
pub fn render(management: &DistributionManagement, format: OutputFormat) -> Result<String, Error> {
    let rendered = match format {
        OutputFormat::Toml => toml::to_string_pretty(management).map_err(|e| e.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(management).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yml::to_string(management).map_err(|e| e.to_string()),
    };
    rendered.map_err(|error| ConfigError::SerializeError { error }.into())
}
