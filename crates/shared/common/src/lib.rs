//! Common utilities shared by the configuration crates.
//!
//! This crate provides:
//! - Configuration error handling
//! - Environment variable names and defaults
//! - The `EnvSource` abstraction and `.env` file loading

pub mod constants;
pub mod env;
pub mod error;

pub use constants::*;
pub use env::{load_env_file, EnvSource, ProcessEnv};
pub use error::{AppResult, ConfigError};

#[cfg(any(test, feature = "test-utils"))]
pub use env::MockEnvSource;
