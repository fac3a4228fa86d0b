//! Per-repository outcome types.

use super::ActionError;
use serde::Serialize;
use std::fmt;

/// One action of the per-repository pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Change the repository's visibility.
    Visibility,
    /// Clone the repository locally.
    Clone,
    /// Delete the repository from GitHub.
    Delete,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Visibility => f.write_str("Toggle visibility"),
            Step::Clone => f.write_str("Clone locally"),
            Step::Delete => f.write_str("Delete from GitHub"),
        }
    }
}

/// Result of running the pipeline for a single repository.
#[derive(Debug)]
pub struct ActionOutcome {
    /// Repository full name.
    pub repository: String,

    /// Steps that were started, in order.
    pub attempted: Vec<Step>,

    /// Steps that completed.
    pub succeeded: Vec<Step>,

    /// The first failure, after which no further step ran.
    pub failure: Option<ActionError>,
}

impl ActionOutcome {
    /// Creates an outcome with nothing attempted yet.
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            attempted: Vec::new(),
            succeeded: Vec::new(),
            failure: None,
        }
    }

    /// Returns true if no step failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Returns true if `step` completed.
    #[must_use]
    pub fn succeeded(&self, step: Step) -> bool {
        self.succeeded.contains(&step)
    }

    pub(crate) fn begin(&mut self, step: Step) {
        self.attempted.push(step);
    }

    pub(crate) fn complete(&mut self, step: Step) {
        self.succeeded.push(step);
    }
}
