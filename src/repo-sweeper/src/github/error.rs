//! GitHub API error types.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by a single GitHub API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub answered with an error message.
    #[error("{message}")]
    GitHub {
        /// HTTP status, when known. GraphQL errors arrive without one.
        status: Option<u16>,
        message: String,
    },

    /// The request did not complete (network, TLS, timeout, decoding).
    #[error("{message}")]
    Transport { message: String },

    /// The response carried neither the expected data nor an error message.
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// The GraphQL response had no repository connection for the owner.
    #[error("No {kind} named '{owner}' was found")]
    MissingOwner { owner: String, kind: &'static str },
}

impl From<octocrab::Error> for ApiError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => ApiError::GitHub {
                status: Some(source.status_code.as_u16()),
                message: source.message.clone(),
            },
            other => ApiError::Transport {
                message: describe_transport(&other),
            },
        }
    }
}

/// Short description of a transport failure.
///
/// octocrab's own `Display` appends a captured backtrace, so the message is
/// built from the chain of underlying causes instead.
fn describe_transport(error: &octocrab::Error) -> String {
    let mut causes: Vec<String> = Vec::new();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let text = cause.to_string();
        if causes.last() != Some(&text) {
            causes.push(text);
        }
        source = cause.source();
    }

    if causes.is_empty() {
        error
            .to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    } else {
        causes.join(": ")
    }
}

/// Generic GitHub error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the `message` field from a JSON error body.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
}
