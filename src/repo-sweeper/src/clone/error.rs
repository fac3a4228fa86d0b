//! Clone error types.

use thiserror::Error;

/// Errors that can occur while cloning a repository.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The remote URL cannot carry credentials.
    #[error("Cannot clone from '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The repository name is not usable as a directory name.
    #[error("Refusing to clone into unsafe directory name '{name}'")]
    UnsafeDestination { name: String },

    /// `git` could not be started.
    #[error("Failed to execute git {action}: {message}")]
    Spawn {
        action: &'static str,
        message: String,
    },

    /// A `git` command exited unsuccessfully.
    #[error("git {action} failed: {message}")]
    Failed {
        action: &'static str,
        message: String,
    },
}
