//! Error types for the SQLite article store.

use thiserror::Error;

/// SQLite storage error type.
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema/migration error
    #[error("Schema error: {0}")]
    Schema(String),

    /// No article stored under the URL
    #[error("No article about {0}")]
    NotFound(String),

    /// Create on a URL that already has an article
    #[error("Already have article about {0}")]
    AlreadyExists(String),

    /// Stored content is not valid compressed UTF-8
    #[error("Corrupt article content for {url}: {reason}")]
    CorruptContent { url: String, reason: String },

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for store operations.
pub type SqliteResult<T> = Result<T, SqliteError>;
