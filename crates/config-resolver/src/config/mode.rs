//! Application run mode.

use std::fmt;

use common::DEFAULT_MODE;

/// Value of the `MODE` variable.
///
/// Informational only: nothing in resolution branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Production,
    /// Any other value, kept verbatim (including the empty string)
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Development => DEFAULT_MODE,
            Mode::Production => "production",
            Mode::Other(value) => value,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value {
            "development" => Mode::Development,
            "production" => Mode::Production,
            other => Mode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
