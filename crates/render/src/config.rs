use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

pub const ENV_PRETTY_JSON: &str = "RENDER_PRETTY_JSON";
pub const ENV_XML_ROOT: &str = "RENDER_XML_ROOT";
pub const ENV_XML_DECLARATION: &str = "RENDER_XML_DECLARATION";

const DEFAULT_XML_ROOT: &str = "response";

static XML_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9._-]*$").expect("XML name pattern must compile")
});

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid XML root element name: {root:?}")]
    InvalidXmlRoot { root: String },

    #[error("Config file not found: {path}")]
    ConfigFileNotFound { path: String },

    #[error("JSON parsing failed: {message}")]
    JsonParsingFailed { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

/// Output settings shared by every writer of a [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Indent JSON bodies.
    pub pretty_json: bool,
    /// Name of the element wrapping every XML body.
    pub xml_root: String,
    /// Prefix XML bodies with an `<?xml ...?>` declaration.
    pub xml_declaration: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty_json: false,
            xml_root: DEFAULT_XML_ROOT.to_string(),
            xml_declaration: false,
        }
    }
}

impl RenderConfig {
    /// Defaults overridden by `RENDER_*` environment variables.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = env_var(ENV_PRETTY_JSON) {
            config.pretty_json = parse_bool(ENV_PRETTY_JSON, &value)?;
        }
        if let Some(value) = env_var(ENV_XML_ROOT) {
            config.xml_root = value;
        }
        if let Some(value) = env_var(ENV_XML_DECLARATION) {
            config.xml_declaration = parse_bool(ENV_XML_DECLARATION, &value)?;
        }

        config.validate()?;
        debug!(?config, "Loaded render config from environment");
        Ok(config)
    }

    /// Reads a JSON document; missing keys keep their defaults.
    #[instrument]
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigFileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::JsonParsingFailed {
                message: e.to_string(),
            })?;

        config.validate()?;
        debug!(?config, "Loaded render config from file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_xml_name(&self.xml_root) || self.xml_root.to_ascii_lowercase().starts_with("xml") {
            return Err(ConfigError::InvalidXmlRoot {
                root: self.xml_root.clone(),
            });
        }
        Ok(())
    }
}

/// Whether `name` can be used as an XML element name as is.
pub(crate) fn is_xml_name(name: &str) -> bool {
    XML_NAME.is_match(name)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
