//! Environment variable names and resolution defaults
//!
//! Centralized location for the keys the resolver reads.

// =============================================================================
// Application
// =============================================================================

/// Runtime mode of the application
pub const ENV_MODE: &str = "MODE";

/// Mode used when `MODE` is not set
pub const DEFAULT_MODE: &str = "development";

/// Passthrough timezone name
pub const ENV_TIMEZONE: &str = "TIMEZONE";

/// Passthrough application secret
pub const ENV_APP_SECRET_KEY: &str = "APP_SECRET_KEY";

// =============================================================================
// Database
// =============================================================================

pub const ENV_DB_USERNAME: &str = "DB_USERNAME";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_SSLMODE: &str = "DB_SSLMODE";

/// SSL mode used when `DB_SSLMODE` is not set
pub const DEFAULT_DB_SSLMODE: &str = "require";

/// Connection string scheme
pub const DB_SCHEME: &str = "postgresql";

/// Client driver named in the connection string scheme
pub const DB_DRIVER: &str = "psycopg2";

// =============================================================================
// Settings mapping keys
// =============================================================================

pub const KEY_CONNECTION_URI: &str = "connection_uri";
pub const KEY_TIMEZONE: &str = "timezone";
pub const KEY_SECRET_KEY: &str = "secret_key";

/// Placeholder shown in place of secrets
pub const REDACTED: &str = "[REDACTED]";

// =============================================================================
// Env file
// =============================================================================

/// File name searched for when no env file is given
pub const DEFAULT_ENV_FILE: &str = ".env";
