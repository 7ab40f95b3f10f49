//! Uri command - Print the database connection string.

use common::AppResult;

use crate::cli::args::UriArgs;
use crate::config::ResolvedConfig;

/// Execute the uri command
pub fn execute(args: UriArgs, config: &ResolvedConfig) -> AppResult<()> {
    if config.database().host().is_empty() {
        tracing::warn!("DB_HOST is not set; connection string has an empty host");
    }

    if args.reveal {
        println!("{}", config.connection_uri());
    } else {
        println!("{}", config.database().redacted_uri());
    }

    Ok(())
}
