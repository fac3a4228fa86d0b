//! Repository enumeration error types.

use crate::github::ApiError;
use thiserror::Error;

/// Errors that abort repository enumeration.
///
/// Enumeration is all-or-nothing: any of these discards pages already fetched.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// A page request failed.
    #[error("Failed to fetch repository page {page} for '{account}': {source}")]
    Page {
        account: String,
        page: usize,
        #[source]
        source: ApiError,
    },

    /// GitHub reported more pages but gave no cursor to continue from.
    #[error("Repository page {page} for '{account}' reported more pages without an end cursor")]
    MissingCursor { account: String, page: usize },
}
