//! CLI configuration.
//!
//! A small TOML file; every field has a default so a missing file or a
//! partial file both work:
//!
//! ```toml
//! [storage]
//! db_path = "/home/me/wiki/linkwell.db"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Database file path. Defaults to the platform data directory.
    pub db_path: Option<PathBuf>,
}

/// Default config file location: `~/.config/linkwell/config.toml` (or the
/// platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linkwell").join("config.toml"))
}

/// Default database location: `~/.local/share/linkwell/linkwell.db` (or the
/// platform equivalent).
pub fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("no data directory for this platform")?;
    Ok(data_dir.join("linkwell").join("linkwell.db"))
}

impl Config {
    /// Load configuration from the given path, or from the default location.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// The database path to use, honoring the override chain:
    /// `--db` flag > config file > platform default.
    pub fn resolve_db_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.storage.db_path {
            return Ok(path.clone());
        }
        default_db_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/linkwell.toml"))).unwrap();
        assert!(config.storage.db_path.is_none());
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str("[storage]\ndb_path = \"/tmp/wiki.db\"\n").unwrap();
        assert_eq!(
            config.storage.db_path,
            Some(PathBuf::from("/tmp/wiki.db"))
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = toml::from_str::<Config>("[storage]\ndb = \"/tmp/wiki.db\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_flag_overrides_config() {
        let config: Config = toml::from_str("[storage]\ndb_path = \"/tmp/wiki.db\"\n").unwrap();
        let resolved = config
            .resolve_db_path(Some(Path::new("/override/other.db")))
            .unwrap();
        assert_eq!(resolved, PathBuf::from("/override/other.db"));
    }
}
