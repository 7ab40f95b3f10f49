//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve application configuration from the environment
#[derive(Parser, Debug)]
#[command(name = "config-resolver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file to load before resolving (default: nearest .env, if any)
    #[arg(short, long, global = true, env = "ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings mapping
    Show(ShowArgs),

    /// Print the database connection string
    Uri(UriArgs),

    /// Fail if any database variable is unset
    Check,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print secrets instead of masking them
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for the uri command
#[derive(Parser, Debug)]
pub struct UriArgs {
    /// Print the password instead of masking it
    #[arg(long)]
    pub reveal: bool,
}

/// Rendering for the show command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    Json,
    /// KEY=value lines
    Env,
}
