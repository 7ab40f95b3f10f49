//! Configuration error handling.
//!
//! Resolving the configuration never fails. These errors come from the
//! surfaces around it: loading an env file, the opt-in completeness check
//! and rendering the settings for output.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load env file {path:?}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Missing environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    /// Get a stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::EnvFile { .. } => "ENV_FILE_ERROR",
            ConfigError::MissingVariables(_) => "MISSING_VARIABLES",
            ConfigError::Serialize(_) => "SERIALIZE_ERROR",
        }
    }
}

/// Convenience constructors
impl ConfigError {
    pub fn env_file(path: impl Into<PathBuf>, source: dotenvy::Error) -> Self {
        ConfigError::EnvFile {
            path: path.into(),
            source,
        }
    }

    pub fn missing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigError::MissingVariables(names.into_iter().map(Into::into).collect())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variables_message() {
        let err = ConfigError::missing(["DB_HOST", "DB_PORT"]);
        assert_eq!(err.to_string(), "Missing environment variables: DB_HOST, DB_PORT");
        assert_eq!(err.code(), "MISSING_VARIABLES");
    }

    #[test]
    fn test_serialize_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = json_err.into();
        assert_eq!(err.code(), "SERIALIZE_ERROR");
    }
}
