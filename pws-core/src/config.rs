use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Connection settings for the station API, loaded once at startup and never
/// mutated afterwards.
///
/// Example TOML:
/// ```toml
/// api_base_url = "https://api.weather.com/v2/pws/observations/current"
/// station_id = "KMABOSTO123"
/// units = "e"
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub station_id: String,
    pub units: String,
    pub api_key: String,
}

impl Config {
    /// Load config from disk. A missing file is an error here, unlike tools
    /// with an interactive setup step: every value is required before the
    /// first request can be built.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Err(Error::ConfigMissing { path });
        }

        let contents = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;

        Self::from_toml(&contents).map_err(|err| match err {
            Error::ConfigParse { source, .. } => Error::ConfigParse { path, source },
            other => other,
        })
    }

    /// Parse config from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| Error::ConfigParse {
            path: PathBuf::new(),
            source,
        })
    }

    /// Check that all four values are non-empty. Must pass before any request
    /// is attempted; the station client assumes validated input.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("api_base_url", &self.api_base_url),
            ("station_id", &self.station_id),
            ("units", &self.units),
            ("api_key", &self.api_key),
        ] {
            if value.trim().is_empty() {
                return Err(Error::ConfigValue(name));
            }
        }
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "pws", "pws").ok_or(Error::ConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Config {
        Config {
            api_base_url: "https://api.weather.com/v2/pws/observations/current".to_string(),
            station_id: "KTEST1".to_string(),
            units: "e".to_string(),
            api_key: "SECRET".to_string(),
        }
    }

    #[test]
    fn from_toml_parses_all_values() {
        let cfg = Config::from_toml(
            r#"
            api_base_url = "https://api.weather.com/v2/pws/observations/current"
            station_id = "KTEST1"
            units = "e"
            api_key = "SECRET"
            "#,
        )
        .expect("config must parse");

        assert_eq!(cfg.station_id, "KTEST1");
        assert_eq!(cfg.units, "e");
        assert_eq!(cfg.api_key, "SECRET");
    }

    #[test]
    fn from_toml_rejects_missing_key() {
        let err = Config::from_toml(r#"station_id = "KTEST1""#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn validate_accepts_full_config() {
        assert!(full_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let mut cfg = full_config();
        cfg.api_key = String::new();

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigValue("api_key")));
    }

    #[test]
    fn validate_rejects_blank_station_id() {
        let mut cfg = full_config();
        cfg.station_id = "   ".to_string();

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigValue("station_id")));
    }
}
