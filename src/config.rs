//! Engine configuration for wayfind
//!
//! Configuration is read from and written to a TOML file. Every field is
//! optional on disk; missing values fall back to the defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{
    DisplayConfig, EngineConfig, CONFIG_FORMAT_VERSION, DEFAULT_PATH_CUT,
    DEFAULT_WEIGHT_PRECISION,
};

impl EngineConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "Configuration written by a newer version; unknown settings are ignored"
            );
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Strategy;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.default_strategy, Strategy::Dijkstra);
        assert_eq!(config.display.path_cut, 10);
        assert_eq!(config.display.weight_precision, 2);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_display_section() {
        let config = EngineConfig::from_toml_str(
            r#"
default_strategy = "breadth-first"

[display]
path_cut = 3
"#,
        )
        .unwrap();
        assert_eq!(config.default_strategy, Strategy::BreadthFirst);
        assert_eq!(config.display.path_cut, 3);
        assert_eq!(config.display.weight_precision, 2);
    }

    #[test]
    fn test_zero_path_cut_is_accepted() {
        let config = EngineConfig::from_toml_str("[display]\npath_cut = 0\n").unwrap();
        assert_eq!(config.display.path_cut, 0);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = EngineConfig::from_toml_str(r#"default_strategy = "a-star""#).unwrap_err();
        assert_eq!(err.error_type(), "toml_error");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wayfind.toml");

        let config = EngineConfig {
            default_strategy: Strategy::DepthFirst,
            display: DisplayConfig {
                path_cut: 4,
                weight_precision: 3,
            },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = EngineConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.error_type(), "io_error");
    }
}
