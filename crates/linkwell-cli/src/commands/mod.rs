//! Subcommand handlers.
//!
//! Each handler takes the opened store plus its arguments and prints to
//! stdout; failures bubble up as `anyhow` errors and exit nonzero in main.

mod article;
mod search;
mod view;

pub use article::{create, delete, edit, set_tags, update};
pub use search::search;
pub use view::{print_article, view, view_backlinks, view_tags};
