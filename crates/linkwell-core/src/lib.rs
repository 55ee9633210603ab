//! Core types for linkwell
//!
//! This crate holds the pieces shared by every frontend and backend:
//!
//! - **Article**: the value record for a stored note (URL, content, links,
//!   backlinks, tags)
//! - **URL handling**: trailing-slash normalization and domain extraction
//! - **Link extraction**: finding `[[...]]` markers in article text, both as
//!   a link set and as an ordered text/link chunk sequence for rendering

pub mod article;
pub mod links;
pub mod url;

pub use article::Article;
pub use links::{extract_links, link_chunks, Chunk};
pub use url::{normalize_url, url_domain};
