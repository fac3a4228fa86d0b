//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an invalid value.
    #[error("Invalid {field}: {message}")]
    ValidationError { field: &'static str, message: String },

    /// A required setting was not supplied by any source.
    #[error("Missing required setting: {field}")]
    MissingSetting { field: &'static str },
}
