//! Application configuration.
//!
//! Configuration is stored in a `proforma.toml` file next to the working
//! directory. A missing file falls back to defaults so the tool works out
//! of the box.
//!
//! # Configuration File Format
//!
//! ```toml
//! endpoint = "https://www.subber.net/api/ai"
//! prompt = "Extract the proforma invoice fields from this document."
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "proforma.toml";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// AI analysis endpoint URL.
    pub endpoint: String,
    /// Prompt sent with every analysis request unless overridden.
    pub prompt: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.subber.net/api/ai".to_string(),
            prompt: "Extract the proforma invoice fields from this document.".to_string(),
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the default configuration; a present but
    /// unparseable file is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// JSON schema describing the configuration format.
    pub fn schema() -> anyhow::Result<serde_json::Value> {
        let schema = schemars::schema_for!(AppConfig);
        Ok(serde_json::to_value(&schema)?)
    }
}
