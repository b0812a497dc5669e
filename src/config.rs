use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::notify::NotifierKind;
use crate::validation::default_min_birth_date;

/// Settings read from an optional TOML file.
///
/// ```toml
/// min_birth_date = "1900-01-01"
/// notifier = "console"   # or "log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub min_birth_date: NaiveDate,
    pub notifier: NotifierKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_birth_date: default_min_birth_date(),
            notifier: NotifierKind::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
