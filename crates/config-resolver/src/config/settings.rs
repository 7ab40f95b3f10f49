//! Application settings resolved from environment variables.

use std::collections::BTreeMap;

use common::{
    AppResult, ConfigError, EnvSource, ProcessEnv, ENV_APP_SECRET_KEY, ENV_MODE, ENV_TIMEZONE,
    KEY_CONNECTION_URI, KEY_SECRET_KEY, KEY_TIMEZONE, REDACTED,
};

use super::database::DatabaseSettings;
use super::mode::Mode;

/// Flat settings mapping handed to consumers.
///
/// Absent passthrough values are `None`.
pub type Settings = BTreeMap<&'static str, Option<String>>;

/// Resolved application configuration.
///
/// Built once at startup and read-only afterwards. Pass it by reference
/// (or clone it) into whatever needs it.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    mode: Mode,
    database: DatabaseSettings,
    connection_uri: String,
    timezone: Option<String>,
    secret_key: Option<String>,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("mode", &self.mode)
            .field("database", &self.database)
            .field("connection_uri", &REDACTED)
            .field("timezone", &self.timezone)
            .field("secret_key", &mask(self.secret_key.as_deref()))
            .finish()
    }
}

impl ResolvedConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Load any `.env` file before calling this.
    pub fn from_env() -> Self {
        Self::resolve(&ProcessEnv)
    }

    /// Resolve configuration from an environment source.
    ///
    /// Never fails: unset database variables become empty strings in the
    /// connection string.
    pub fn resolve<S: EnvSource + ?Sized>(env: &S) -> Self {
        let mode = env
            .get(ENV_MODE)
            .map(|value| Mode::from(value.as_str()))
            .unwrap_or_default();
        let database = DatabaseSettings::resolve(env);
        let connection_uri = database.connection_uri();

        Self {
            mode,
            database,
            connection_uri,
            timezone: env.get(ENV_TIMEZONE),
            secret_key: env.get(ENV_APP_SECRET_KEY),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub fn connection_uri(&self) -> &str {
        &self.connection_uri
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    /// The settings mapping: connection string plus passthrough fields.
    pub fn settings(&self) -> Settings {
        BTreeMap::from([
            (KEY_CONNECTION_URI, Some(self.connection_uri.clone())),
            (KEY_TIMEZONE, self.timezone.clone()),
            (KEY_SECRET_KEY, self.secret_key.clone()),
        ])
    }

    /// The settings mapping with the database password and secret key masked.
    pub fn redacted_settings(&self) -> Settings {
        BTreeMap::from([
            (KEY_CONNECTION_URI, Some(self.database.redacted_uri())),
            (KEY_TIMEZONE, self.timezone.clone()),
            (KEY_SECRET_KEY, mask(self.secret_key.as_deref())),
        ])
    }

    /// Database variables without a default that were not set.
    pub fn missing_variables(&self) -> Vec<&'static str> {
        self.database.missing_variables()
    }

    /// Fail if any database variable without a default was not set.
    ///
    /// Resolution never calls this; it is for callers that want a hard
    /// failure instead of a degenerate connection string.
    pub fn ensure_complete(&self) -> AppResult<()> {
        let missing = self.missing_variables();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::missing(missing))
        }
    }
}

/// Mask a non-empty secret; an empty one has nothing to hide.
fn mask(secret: Option<&str>) -> Option<String> {
    secret.map(|value| {
        if value.is_empty() {
            String::new()
        } else {
            REDACTED.to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("DB_USERNAME", "a"),
            ("DB_PASSWORD", "b"),
            ("DB_HOST", "h"),
            ("DB_PORT", "5432"),
            ("DB_NAME", "n"),
        ])
    }

    #[test]
    fn test_sslmode_defaults_to_require() {
        let config = ResolvedConfig::resolve(&full_env());
        assert_eq!(
            config.connection_uri(),
            "postgresql+psycopg2://a:b@h:5432/n?sslmode=require"
        );
        assert_eq!(config.database().sslmode(), "require");
    }

    #[test]
    fn test_all_database_variables_unset() {
        let config = ResolvedConfig::resolve(&env(&[]));
        assert_eq!(config.connection_uri(), "postgresql+psycopg2://:@:/?sslmode=require");
        assert_eq!(config.timezone(), None);
        assert_eq!(config.secret_key(), None);
    }

    #[test]
    fn test_every_field_present() {
        let mut vars = full_env();
        vars.insert("DB_SSLMODE".to_string(), "verify-full".to_string());
        vars.insert("TIMEZONE".to_string(), "Asia/Seoul".to_string());
        vars.insert("APP_SECRET_KEY".to_string(), "s3cret".to_string());

        let config = ResolvedConfig::resolve(&vars);

        assert_eq!(
            config.connection_uri(),
            "postgresql+psycopg2://a:b@h:5432/n?sslmode=verify-full"
        );
        assert_eq!(config.timezone(), Some("Asia/Seoul"));
        assert_eq!(config.secret_key(), Some("s3cret"));
    }

    #[test]
    fn test_empty_sslmode_is_used_verbatim() {
        let mut vars = full_env();
        vars.insert("DB_SSLMODE".to_string(), String::new());

        let config = ResolvedConfig::resolve(&vars);

        assert!(config.connection_uri().ends_with("?sslmode="));
    }

    #[test]
    fn test_mode_defaults_and_does_not_change_uri() {
        let dev = ResolvedConfig::resolve(&full_env());
        assert_eq!(dev.mode(), &Mode::Development);

        let mut vars = full_env();
        vars.insert("MODE".to_string(), "production".to_string());
        let prod = ResolvedConfig::resolve(&vars);

        assert!(prod.mode().is_production());
        assert_eq!(prod.connection_uri(), dev.connection_uri());
    }

    #[test]
    fn test_settings_mapping() {
        let mut vars = full_env();
        vars.insert("TIMEZONE".to_string(), String::new());

        let settings = ResolvedConfig::resolve(&vars).settings();

        assert_eq!(settings.len(), 3);
        assert_eq!(
            settings["connection_uri"].as_deref(),
            Some("postgresql+psycopg2://a:b@h:5432/n?sslmode=require")
        );
        assert_eq!(settings["timezone"].as_deref(), Some(""));
        assert_eq!(settings["secret_key"], None);
    }

    #[test]
    fn test_redacted_settings_hide_secrets() {
        let mut vars = full_env();
        vars.insert("DB_PASSWORD".to_string(), "hunter2".to_string());
        vars.insert("APP_SECRET_KEY".to_string(), "s3cret".to_string());
        let config = ResolvedConfig::resolve(&vars);

        let redacted = config.redacted_settings();
        let rendered = format!("{:?} {:?}", redacted, config);

        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("s3cret"));
        assert_eq!(redacted["secret_key"].as_deref(), Some("[REDACTED]"));
    }

    #[test]
    fn test_ensure_complete() {
        assert!(ResolvedConfig::resolve(&full_env()).ensure_complete().is_ok());

        let err = ResolvedConfig::resolve(&env(&[("DB_HOST", "h")]))
            .ensure_complete()
            .unwrap_err();
        match err {
            ConfigError::MissingVariables(names) => {
                assert_eq!(names, vec!["DB_USERNAME", "DB_PASSWORD", "DB_PORT", "DB_NAME"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_secret_key_is_not_masked() {
        let mut vars = full_env();
        vars.insert("DB_PASSWORD".to_string(), String::new());
        vars.insert("APP_SECRET_KEY".to_string(), String::new());
        let config = ResolvedConfig::resolve(&vars);

        let redacted = config.redacted_settings();

        assert_eq!(redacted["secret_key"].as_deref(), Some(""));
        assert_eq!(
            redacted["connection_uri"].as_deref(),
            Some("postgresql+psycopg2://a:@h:5432/n?sslmode=require")
        );
    }
}
