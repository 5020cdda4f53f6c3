use crate::error::{DaybookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Configuration for daybook, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaybookConfig {
    /// strftime pattern used when printing absolute timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Show "2 days ago" style timestamps in list output
    #[serde(default = "default_relative_times")]
    pub relative_times: bool,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_relative_times() -> bool {
    true
}

impl Default for DaybookConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            relative_times: default_relative_times(),
        }
    }
}

impl DaybookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DaybookError::Io)?;
        let config: DaybookConfig =
            serde_json::from_str(&content).map_err(DaybookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DaybookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DaybookError::Serialization)?;
        fs::write(config_path, content).map_err(DaybookError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DaybookConfig::default();
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
        assert!(config.relative_times);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = DaybookConfig::load(temp.path().join("nothing-here")).unwrap();
        assert_eq!(config, DaybookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = DaybookConfig::default();
        config.date_format = "%d/%m/%Y".to_string();
        config.relative_times = false;
        config.save(temp.path()).unwrap();

        let loaded = DaybookConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"dateFormat": "%Y"}"#,
        )
        .unwrap();

        // Unknown shape: camelCase key is ignored, defaults apply
        let loaded = DaybookConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.date_format, "%Y-%m-%d %H:%M");
        assert!(loaded.relative_times);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = DaybookConfig {
            date_format: "%H:%M".to_string(),
            relative_times: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DaybookConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
