//! TOML settings for building an item context.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ItemError;

/// How to build an [`ItemContext`](crate::ItemContext).
///
/// ```toml
/// version = "1.16.5"
/// data_file = "data/custom_1.16.5.json"   # optional
/// unique_id_start = 1000                   # optional
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ContextConfig {
    /// Game version string, e.g. `"1.12.2"` or `"bedrock_1.16.220"`.
    pub version: String,
    /// Version data to use instead of the bundled table. Its `version` must
    /// match `version` above.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// First unique id handed out. Must be at least 1; 0 marks the empty
    /// placeholder item.
    #[serde(default = "default_unique_id_start")]
    pub unique_id_start: u32,
}

fn default_unique_id_start() -> u32 {
    1000
}

impl ContextConfig {
    /// Config for a bundled version with default settings.
    pub fn for_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            data_file: None,
            unique_id_start: default_unique_id_start(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ItemError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ItemError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        if self.unique_id_start == 0 {
            return Err(ItemError::InvalidConfig(
                "unique_id_start must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
