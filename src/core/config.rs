use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// The category vocabulary offered at the CLI surface.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// chrono format string used for dates in tables and exports.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    pub data_path: Option<String>,
}

fn default_categories() -> Vec<String> {
    ["Food", "Transport", "Rent", "Utilities", "Entertainment", "Health", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            data_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults
    /// when none has been written yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "xpense", "xpense")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Directory holding the ledger slot.
    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("io", "xpense", "xpense")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
categories:
  - Food
  - Travel
currency_symbol: "$"
date_format: "%Y-%m-%d"
data_path: "/tmp/xpense-data"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.categories, ["Food", "Travel"]);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.data_path.as_deref(), Some("/tmp/xpense-data"));
        assert_eq!(
            config.default_data_path().unwrap(),
            PathBuf::from("/tmp/xpense-data")
        );
    }

    #[test]
    fn test_config_defaults_apply_to_missing_fields() {
        let config: AppConfig = serde_yaml::from_str("data_path: \"/tmp/x\"").unwrap();
        assert!(config.categories.contains(&"Food".to_string()));
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.date_format, "%d/%m/%Y");
    }
}
