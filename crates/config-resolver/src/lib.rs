//! Configuration Resolver Library
//!
//! Reads the application's environment variables once at startup, applies
//! defaults and derives the database connection string.
//!
//! ```no_run
//! use config_resolver_lib::ResolvedConfig;
//!
//! common::load_env_file(None)?;
//! let config = ResolvedConfig::from_env();
//! println!("{}", config.connection_uri());
//! # Ok::<(), common::ConfigError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;

pub use config::{DatabaseSettings, Mode, ResolvedConfig, Settings};

use common::{load_env_file, AppResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

/// Load the env file, resolve the configuration and run the command.
pub fn run(cli: Cli) -> AppResult<()> {
    load_env_file(cli.env_file.as_deref())?;

    let config = ResolvedConfig::from_env();
    tracing::debug!(?config, "Configuration resolved");

    match cli.command {
        Commands::Show(args) => commands::show::execute(args, &config),
        Commands::Uri(args) => commands::uri::execute(args, &config),
        Commands::Check => commands::check::execute(&config),
    }
}

/// Install the tracing subscriber on stderr; stdout carries command output.
///
/// `verbose` forces debug level, otherwise `RUST_LOG` applies (default `info`).
/// Fails if a global subscriber is already set.
pub fn init_tracing(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .try_init()
}
