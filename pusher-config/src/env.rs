// Environment variable loading

use crate::{ConfigError, Result};
use std::env;
use std::fmt;
use std::path::Path;

/// Name of the variable the Pusher Heroku add-on sets.
pub const DEFAULT_ENV_VAR: &str = "PUSHER_URL";

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Environment variable loader
///
/// Reads from the process environment by default. Tests and embedders can
/// swap in their own accessor with [`EnvLoader::with_lookup`].
pub struct EnvLoader {
    lookup: Lookup,
}

impl EnvLoader {
    /// Create a loader backed by the process environment
    pub fn new() -> Self {
        Self {
            lookup: Box::new(|name| env::var(name).ok()),
        }
    }

    /// Create a loader backed by a custom accessor
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Load a variable, treating an empty value the same as an unset one
    pub fn load_var(&self, name: &str) -> Result<String> {
        match (self.lookup)(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvironmentVariable(name.to_string())),
        }
    }

    /// Load with default value
    pub fn load_var_or(&self, name: &str, default: &str) -> String {
        self.load_var(name).unwrap_or_else(|_| default.to_string())
    }

    /// Load a `.env` file into the process environment.
    ///
    /// Variables already present in the environment are not overwritten.
    pub fn load_dotenv(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load .env file");
            ConfigError::LoadError(format!("{}: {}", path.display(), e))
        })
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvLoader").finish_non_exhaustive()
    }
}
