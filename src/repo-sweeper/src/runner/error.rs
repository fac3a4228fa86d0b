//! Runner error types.

/// Fatal errors that end a run before or during enumeration.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Repository enumeration failed; no repository can be processed.
    #[error(transparent)]
    Enumeration(#[from] crate::discovery::EnumerationError),

    /// The directory receiving clones could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
