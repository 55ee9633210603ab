//! SQLite store configuration.

use std::path::PathBuf;

/// Configuration for opening the article database.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:` for an in-memory database.
    pub path: PathBuf,
    /// Use WAL journaling (better read concurrency).
    pub wal_mode: bool,
    /// Enforce foreign keys.
    pub foreign_keys: bool,
    /// How long a locked database blocks before failing, in milliseconds.
    pub busy_timeout_ms: u32,
}

impl SqliteConfig {
    /// Configuration for a database at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5000,
        }
    }

    /// Configuration for an in-memory database, used in tests.
    pub fn memory() -> Self {
        // WAL is meaningless without a file backing the database.
        Self {
            wal_mode: false,
            ..Self::new(":memory:")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config() {
        let config = SqliteConfig::memory();
        assert_eq!(config.path.to_str(), Some(":memory:"));
        assert!(!config.wal_mode);
    }

    #[test]
    fn test_file_config_defaults() {
        let config = SqliteConfig::new("/tmp/linkwell.db");
        assert!(config.wal_mode);
        assert!(config.foreign_keys);
        assert_eq!(config.busy_timeout_ms, 5000);
    }
}
