//! SQLite article store for linkwell
//!
//! Persists articles, their link rows, and their tag rows in three SQLite
//! tables, and evaluates query predicates rendered by `linkwell-query`
//! against them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkwell_sqlite::{ArticleStore, SqliteConfig, SqlitePool};
//!
//! let pool = SqlitePool::new(SqliteConfig::new("./linkwell.db"))?;
//! let store = ArticleStore::new(pool);
//!
//! let content = "See [[http://1.com/b]]";
//! store.create("http://1.com/a", content, &linkwell_core::extract_links(content), &tags)?;
//! let urls = store.search(&linkwell_query::parse("domain:1.com")?)?;
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod schema;
pub mod store;

pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
pub use store::ArticleStore;
