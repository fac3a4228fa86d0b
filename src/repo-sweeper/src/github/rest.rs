//! Interpretation of REST repository responses.

use super::error::message_from_body;
use super::ApiError;
use serde::Deserialize;

/// HTTP status GitHub returns for a successful delete.
const NO_CONTENT: u16 = 204;

/// Route of a repository on the REST API.
pub(crate) fn repository_route(name_with_owner: &str) -> String {
    format!("/repos/{name_with_owner}")
}

/// Subset of the "update a repository" response body.
#[derive(Debug, Deserialize)]
struct RepositoryUpdateBody {
    private: Option<bool>,
    message: Option<String>,
}

/// Reads the `private` field of a repository update response.
///
/// A body with a `message` is an API error; a body with neither field, or one
/// that is not JSON, is reported verbatim.
pub fn parse_visibility_response(status: u16, body: &str) -> Result<bool, ApiError> {
    match serde_json::from_str::<RepositoryUpdateBody>(body) {
        Ok(RepositoryUpdateBody {
            message: Some(message),
            ..
        }) => Err(ApiError::GitHub {
            status: Some(status),
            message,
        }),
        Ok(RepositoryUpdateBody {
            private: Some(private),
            ..
        }) => Ok(private),
        _ => Err(ApiError::UnexpectedResponse {
            status,
            body: body.to_string(),
        }),
    }
}

/// Checks a repository delete response. Only `204 No Content` is success.
pub fn parse_delete_response(status: u16, body: &str) -> Result<(), ApiError> {
    if status == NO_CONTENT {
        return Ok(());
    }

    match message_from_body(body) {
        Some(message) => Err(ApiError::GitHub {
            status: Some(status),
            message,
        }),
        None => Err(ApiError::UnexpectedResponse {
            status,
            body: body.to_string(),
        }),
    }
}
