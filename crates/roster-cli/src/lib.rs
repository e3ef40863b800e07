//! Shared pieces of the `roster` command-line tool.

pub mod config;
pub mod logging;
