//! Per-repository action pipeline.
//!
//! Steps run in a fixed order: visibility, clone, delete. Each runs only if
//! configured and only if every earlier step succeeded; a failure skips the
//! rest of that repository and nothing else.

mod error;
mod outcome;

pub use error::ActionError;
pub use outcome::{ActionOutcome, Step};

use crate::clone::{is_safe_directory_name, CloneError, RepositoryCloner};
use crate::config::{Actions, RunConfig};
use crate::discovery::RepositoryRef;
use crate::github::RepositoryHost;
use tracing::{error, info, info_span, Instrument};

/// Steps the pipeline would run for `actions`, in execution order.
pub fn planned_steps(actions: Actions) -> Vec<Step> {
    let mut steps = Vec::with_capacity(3);
    if actions.visibility().is_some() {
        steps.push(Step::Visibility);
    }
    if actions.clone {
        steps.push(Step::Clone);
    }
    if actions.delete {
        steps.push(Step::Delete);
    }
    steps
}

/// Runs the configured steps for one repository.
///
/// Never fails: the first step error is recorded in the returned
/// [`ActionOutcome`] and the remaining steps are skipped.
///
/// # Arguments
///
/// * `host` - GitHub transport for the visibility and delete steps
/// * `cloner` - Clone capability for the clone step
/// * `repository` - Repository to act on
/// * `config` - Run configuration selecting the steps
pub async fn process_repository<H: RepositoryHost, C: RepositoryCloner>(
    host: &H,
    cloner: &C,
    repository: &RepositoryRef,
    config: &RunConfig,
) -> ActionOutcome {
    let span = info_span!("repository", repo = %repository.name_with_owner);

    async {
        let mut outcome = ActionOutcome::new(&repository.name_with_owner);

        if let Err(e) = run_steps(host, cloner, repository, config, &mut outcome).await {
            error!(step = %e.step(), error = %e, "Step failed, skipping remaining steps");
            outcome.failure = Some(e);
        }

        outcome
    }
    .instrument(span)
    .await
}

async fn run_steps<H: RepositoryHost, C: RepositoryCloner>(
    host: &H,
    cloner: &C,
    repository: &RepositoryRef,
    config: &RunConfig,
    outcome: &mut ActionOutcome,
) -> Result<(), ActionError> {
    let actions = config.actions();

    if let Some(visibility) = actions.visibility() {
        outcome.begin(Step::Visibility);
        info!(%visibility, "Toggle visibility...");

        let private = host
            .update_visibility(&repository.name_with_owner, visibility)
            .await
            .map_err(ActionError::Visibility)?;

        if private != visibility.is_private() {
            return Err(ActionError::VisibilityMismatch {
                requested: visibility,
                private,
            });
        }

        info!(private, "Toggle visibility...Done");
        outcome.complete(Step::Visibility);
    }

    if actions.clone {
        outcome.begin(Step::Clone);

        if !is_safe_directory_name(&repository.name) {
            return Err(CloneError::UnsafeDestination {
                name: repository.name.clone(),
            }
            .into());
        }

        let destination = config.clone_destination(&repository.name);
        info!(destination = %destination.display(), "Clone locally...");

        cloner
            .clone_repository(&repository.clone_url, &destination)
            .await?;

        info!("Clone locally...Done");
        outcome.complete(Step::Clone);
    }

    if actions.delete {
        outcome.begin(Step::Delete);
        info!("Delete from GitHub...");

        host.delete_repository(&repository.name_with_owner)
            .await
            .map_err(ActionError::Delete)?;

        info!("Delete from GitHub...Done");
        outcome.complete(Step::Delete);
    }

    Ok(())
}
