// Error types for connection configuration

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unparsable URL: {0}")]
    UnparsableUrl(String),

    #[error("Environment variable {0} not found")]
    MissingEnvironmentVariable(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
