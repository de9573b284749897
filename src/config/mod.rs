use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{CatalogTab, ParseTabError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Picker tab selected at startup (CSPM, CWPP, Image, Ticket)
    pub default_tab: Option<String>,

    pub tick_rate_ms: u64,

    pub status_timeout_secs: u64,

    /// `tracing` filter directive, overridden by RUST_LOG
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tab: None,
            tick_rate_ms: 200,
            status_timeout_secs: 3,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn initial_tab(&self) -> Result<Option<CatalogTab>, ParseTabError> {
        self.default_tab
            .as_deref()
            .map(str::parse::<CatalogTab>)
            .transpose()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }
}

/// Load the config file. A missing file yields the defaults.
pub fn load(path_override: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path_override.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CNAPP_DASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("cnapp-dash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("cnapp-dash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "cnapp-dash", "cnapp-dash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("cnapp-dash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("cnapp-dash"));
    }
    directories::ProjectDirs::from("io", "cnapp-dash", "cnapp-dash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.tick_rate_ms, 200);
        assert_eq!(config.initial_tab(), Ok(None));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_tab = \"image\"\nstatus_timeout_secs = 5\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.initial_tab(), Ok(Some(CatalogTab::Image)));
        assert_eq!(config.status_timeout(), Duration::from_secs(5));
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
    }

    #[test]
    fn test_bad_tab_and_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_tab = \"billing\"\n").unwrap();
        let config = load_from(&path).unwrap();
        assert!(config.initial_tab().is_err());

        fs::write(&path, "tick_rate_ms = \"fast\"\n").unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::Parse { .. })));
    }
}
