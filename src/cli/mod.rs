//! CLI module
//!
//! Command-line interface over the query engine.
//!
//! # Commands
//!
//! - `list` - Stream all records of a kind
//! - `get` - Fetch one record by id
//! - `count` - Count all records of a kind
//! - `kinds` - Show supported resource kinds

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

#[cfg(test)]
mod tests;
