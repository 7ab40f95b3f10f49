//! Check command - Verify the database variables are all set.

use common::AppResult;

use crate::config::ResolvedConfig;

/// Execute the check command
pub fn execute(config: &ResolvedConfig) -> AppResult<()> {
    tracing::info!("Checking database configuration...");

    config.ensure_complete()?;

    tracing::info!(
        mode = %config.mode(),
        sslmode = config.database().sslmode(),
        "Database configuration is complete"
    );
    if config.secret_key().is_none() {
        tracing::warn!("APP_SECRET_KEY is not set");
    }
    if config.timezone().is_none() {
        tracing::warn!("TIMEZONE is not set");
    }

    Ok(())
}
