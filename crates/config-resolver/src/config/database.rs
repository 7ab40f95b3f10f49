//! Database connection settings.

use common::{
    EnvSource, DB_DRIVER, DB_SCHEME, DEFAULT_DB_SSLMODE, ENV_DB_HOST, ENV_DB_NAME,
    ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_SSLMODE, ENV_DB_USERNAME, REDACTED,
};

/// Database connection components as read from the environment.
///
/// Components without a default stay `None` when absent and are
/// interpolated as empty strings. Nothing is validated or escaped.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    username: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<String>,
    name: Option<String>,
    sslmode: String,
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

impl DatabaseSettings {
    /// Read the `DB_*` variables from an environment source.
    pub fn resolve<S: EnvSource + ?Sized>(env: &S) -> Self {
        Self {
            username: env.get(ENV_DB_USERNAME),
            password: env.get(ENV_DB_PASSWORD),
            host: env.get(ENV_DB_HOST),
            port: env.get(ENV_DB_PORT),
            name: env.get(ENV_DB_NAME),
            sslmode: env
                .get(ENV_DB_SSLMODE)
                .unwrap_or_else(|| DEFAULT_DB_SSLMODE.to_string()),
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or_default()
    }

    /// Port as text; it is never parsed.
    pub fn port(&self) -> &str {
        self.port.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn sslmode(&self) -> &str {
        &self.sslmode
    }

    /// Build the connection string with every component inserted verbatim.
    pub fn connection_uri(&self) -> String {
        self.format_uri(self.password())
    }

    /// Connection string with a non-empty password masked, for display.
    pub fn redacted_uri(&self) -> String {
        if self.password().is_empty() {
            self.connection_uri()
        } else {
            self.format_uri(REDACTED)
        }
    }

    /// Names of the variables without a default that were not set.
    pub fn missing_variables(&self) -> Vec<&'static str> {
        [
            (ENV_DB_USERNAME, &self.username),
            (ENV_DB_PASSWORD, &self.password),
            (ENV_DB_HOST, &self.host),
            (ENV_DB_PORT, &self.port),
            (ENV_DB_NAME, &self.name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }

    fn format_uri(&self, password: &str) -> String {
        format!(
            "{}+{}://{}:{}@{}:{}/{}?sslmode={}",
            DB_SCHEME,
            DB_DRIVER,
            self.username(),
            password,
            self.host(),
            self.port(),
            self.name(),
            self.sslmode
        )
    }
}
