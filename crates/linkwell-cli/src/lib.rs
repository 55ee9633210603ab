//! Command-line frontend for linkwell.

pub mod cli;
pub mod commands;
pub mod config;
