//! Augmentation settings.
//!
//! Loaded from TOML, then overridden from the environment:
//! - `LITCAST_RELATIONAL` (`true`/`false`) toggles the comparison adapters
//! - `LITCAST_EXCLUDE` is a comma-separated list of names to leave unwrapped

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Replace `eq`, `ge`, `gt`, `le`, `lt` and `ne` with literal-aware adapters
    pub relational: bool,
    /// Registry entries copied through without a wrapper
    pub exclude: Vec<String>,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self { relational: true, exclude: Vec::new() }
    }
}

impl AugmentConfig {
    pub fn from_toml_str(src: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("LITCAST_RELATIONAL") {
            if let Ok(on) = val.parse::<bool>() {
                self.relational = on;
            }
        }
        if let Ok(val) = env::var("LITCAST_EXCLUDE") {
            self.exclude = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(bad) = self.exclude.iter().find(|n| n.trim().is_empty() || n.trim() != n.as_str()) {
            return Err(ConfigError::Validation(format!("invalid function name in exclude: {:?}", bad)));
        }
        Ok(())
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let c = AugmentConfig::from_toml_str("exclude = [\"substr\"]").unwrap();
        assert!(c.relational);
        assert!(c.is_excluded("substr"));
        assert!(!c.is_excluded("add"));
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = AugmentConfig::from_toml_str("exclude = [\" \"]").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn bad_toml_is_reported() {
        assert!(matches!(AugmentConfig::from_toml_str("relational = 3"), Err(ConfigError::TomlParse(_))));
    }
}
