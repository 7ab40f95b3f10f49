//! Application configuration module
//!
//! Resolves settings from environment variables.

mod database;
mod mode;
mod settings;

pub use database::DatabaseSettings;
pub use mode::Mode;
pub use settings::{ResolvedConfig, Settings};
