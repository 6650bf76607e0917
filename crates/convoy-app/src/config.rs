//! Pipeline configuration
//!
//! Loaded from a TOML file (`convoy.toml` next to the input, or an
//! explicit `--config` path); CLI flags override file values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use convoy_types::{ConfigError, Result};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable scoring and the score-split JSON/XML exports
    #[serde(default)]
    pub scoring: bool,

    /// Worksheet to convert when the input is a spreadsheet
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_sheet_name() -> String {
    "Vehicles".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: false,
            sheet_name: default_sheet_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Resolve the effective configuration for a run: an explicit
    /// config path must exist; otherwise a `convoy.toml` next to the
    /// input is used when present, and defaults apply when not.
    pub fn resolve(explicit: Option<&Path>, input: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("convoy.toml");
        if implicit.exists() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}
