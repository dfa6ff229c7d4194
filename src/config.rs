use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, Result};

pub const DEFAULT_SOURCE_URL: &str =
    "https://opendata.ecdc.europa.eu/covid19/casedistribution/csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default = "default_db_path")]
    pub db_path: String,

    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Columns declared as a composite primary key when the table is
    /// first created. Ignored if the table already exists.
    #[serde(default)]
    pub primary_keys: Vec<String>,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_db_path() -> String {
    "covid.db".to_string()
}

fn default_table_name() -> String {
    "covid".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            db_path: default_db_path(),
            table_name: default_table_name(),
            primary_keys: Vec::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| AppError::Config(e.to_string()))?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("covid2sqlite")
            .join("config.toml")
    }

    /// Reject a source URL that is not parseable before any fetch is tried.
    pub fn validate_source_url(url: &str) -> Result<url::Url> {
        url::Url::parse(url).map_err(|e| AppError::Config(format!("bad source URL '{url}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_dataset() {
        let config = Config::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.db_path, "covid.db");
        assert_eq!(config.table_name, "covid");
        assert!(config.primary_keys.is_empty());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(r#"table_name = "cases""#).unwrap();
        assert_eq!(config.table_name, "cases");
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn bad_source_url_is_rejected() {
        assert!(Config::validate_source_url("not a url").is_err());
        assert!(Config::validate_source_url("https://example.com/data.csv").is_ok());
    }
}
