use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "lw")]
#[command(about = "lw - a personal wiki of articles keyed by URL")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum, default_value = "off")]
    pub log_level: LogLevel,

    /// Config file path (defaults to ~/.config/linkwell/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the database, printing matching URLs one per line
    Search {
        /// A well-formed query, e.g. "domain:1.com AND NOT tag:draft"
        query: String,
    },

    /// Print an article's content plus its backlinks and tags
    Print {
        /// A URL which exists in the database
        url: String,
    },

    /// Dump an article's content to stdout
    View {
        /// A URL which exists in the database
        url: String,
    },

    /// Dump an article's backlinks to stdout, one per line
    ViewBacklinks {
        /// A URL which exists in the database
        url: String,
    },

    /// Dump an article's tags to stdout, one per line
    ViewTags {
        /// A URL which exists in the database
        url: String,
    },

    /// Create a new article, reading its content from stdin
    Create {
        /// A URL which does not exist in the database
        url: String,
        /// Tags to give the new article
        tags: Vec<String>,
    },

    /// Replace an article's content from stdin (tags are kept)
    Update {
        /// A URL which exists in the database
        url: String,
    },

    /// Edit an article's content in $VISUAL (or $EDITOR)
    Edit {
        /// A URL which exists in the database
        url: String,
    },

    /// Replace the set of tags on an article
    SetTags {
        /// A URL which exists in the database
        url: String,
        /// The new tags
        tags: Vec<String>,
    },

    /// Remove an article from the database
    Delete {
        /// The URL to remove (succeeds even if absent)
        url: String,
    },
}
