//! Environment variable sources and `.env` loading.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_ENV_FILE;
use crate::error::{AppResult, ConfigError};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A read-only view of named string variables.
///
/// `None` means the variable is not set. A variable set to the empty
/// string is `Some("")`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource {
    /// Look up a variable by name
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid Unicode are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Populate the process environment from an env file.
///
/// With no path, `.env` is searched for in the current directory and its
/// parents; not finding one is fine. An explicit path must exist.
/// Variables already set in the process are never overridden.
///
/// Returns the path of the file that was loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> AppResult<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| ConfigError::env_file(path, e))?;
            tracing::debug!(path = %path.display(), "Loaded env file");
            Ok(Some(path.to_path_buf()))
        }
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| ConfigError::env_file(DEFAULT_ENV_FILE, dotenvy::Error::Io(e)))?;
            match find_env_file(&cwd) {
                Some(found) => load_env_file(Some(&found)),
                None => {
                    tracing::debug!("No .env file found");
                    Ok(None)
                }
            }
        }
    }
}

/// Nearest `.env` file in `dir` or one of its ancestors.
fn find_env_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|candidate| candidate.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}
