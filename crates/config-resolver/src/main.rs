//! Config Resolver - CLI entry point.

use clap::Parser;

use config_resolver_lib::cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(e) = config_resolver_lib::init_tracing(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = config_resolver_lib::run(cli) {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}
