//! Run summary types.

use crate::pipeline::{ActionOutcome, Step};

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of owned repositories discovered.
    pub repositories_discovered: usize,

    /// Number of repositories whose configured steps all succeeded.
    pub repositories_succeeded: usize,

    /// Number of repositories where a step failed.
    pub repositories_failed: usize,

    /// Number of visibility updates applied.
    pub visibility_updated: usize,

    /// Number of repositories cloned.
    pub cloned: usize,

    /// Number of repositories deleted.
    pub deleted: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with one repository's outcome.
    pub fn record_outcome(&mut self, outcome: &ActionOutcome) {
        if outcome.is_success() {
            self.repositories_succeeded += 1;
        } else {
            self.repositories_failed += 1;
        }

        if outcome.succeeded(Step::Visibility) {
            self.visibility_updated += 1;
        }
        if outcome.succeeded(Step::Clone) {
            self.cloned += 1;
        }
        if outcome.succeeded(Step::Delete) {
            self.deleted += 1;
        }
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0
    }
}
