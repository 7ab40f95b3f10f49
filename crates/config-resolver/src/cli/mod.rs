//! CLI module - Command-line interface for the resolver.
//!
//! Provides commands for:
//! - `show` - Print the settings mapping
//! - `uri` - Print the connection string
//! - `check` - Verify every database variable is set

pub mod args;

pub use args::{Cli, Commands, OutputFormat, ShowArgs, UriArgs};
