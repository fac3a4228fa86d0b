//! Per-repository action error types.

use super::Step;
use crate::clone::CloneError;
use crate::config::Visibility;
use crate::github::ApiError;
use thiserror::Error;

/// A step failure. Stops the remaining steps of one repository only.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The visibility update request failed.
    #[error("Failed to update visibility: {0}")]
    Visibility(#[source] ApiError),

    /// GitHub accepted the update but reports a different visibility.
    #[error("Visibility not applied: requested {requested}, GitHub reports private = {private}")]
    VisibilityMismatch { requested: Visibility, private: bool },

    /// The local clone failed.
    #[error("Failed to clone: {0}")]
    Clone(#[from] CloneError),

    /// The delete request failed.
    #[error("Failed to delete: {0}")]
    Delete(#[source] ApiError),
}

impl ActionError {
    /// The step that produced this error.
    pub fn step(&self) -> Step {
        match self {
            ActionError::Visibility(_) | ActionError::VisibilityMismatch { .. } => {
                Step::Visibility
            }
            ActionError::Clone(_) => Step::Clone,
            ActionError::Delete(_) => Step::Delete,
        }
    }
}
