//! Orchestrates a sweep: enumerate once, then run the pipeline per repository.

mod error;

pub use error::RunnerError;

use crate::clone::{GitCloner, RepositoryCloner};
use crate::config::RunConfig;
use crate::discovery::{discover_repositories, RepositoryRef};
use crate::github::{OctocrabHost, RepositoryHost};
use crate::pipeline::{planned_steps, process_repository, Step};
use crate::summary::RunSummary;
use std::path::Path;
use tracing::{info, warn};

/// Runs a full sweep over one account.
///
/// Repositories are processed one at a time in enumeration order; a
/// repository's steps all finish before the next repository starts.
pub struct Runner<H = OctocrabHost, C = GitCloner> {
    config: RunConfig,
    host: H,
    cloner: C,
}

impl Runner {
    /// Builds a runner talking to GitHub and cloning with `git`.
    pub fn new(config: RunConfig) -> Result<Self, RunnerError> {
        let host = OctocrabHost::new(config.token(), config.timeout())?;
        let cloner = GitCloner::new(config.token(), config.timeout());
        Ok(Self::with_transport(config, host, cloner))
    }
}

impl<H: RepositoryHost, C: RepositoryCloner> Runner<H, C> {
    /// Builds a runner from explicit transport implementations.
    pub fn with_transport(config: RunConfig, host: H, cloner: C) -> Self {
        Self {
            config,
            host,
            cloner,
        }
    }

    /// Executes the full orchestration flow.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] only for fatal failures: enumeration, or creating
    /// the clone directory. Per-repository failures are recorded in the summary.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let config = &self.config;
        let actions = config.actions();
        let mut summary = RunSummary::new(config.dry_run());

        if actions.is_empty() {
            warn!("No actions enabled, repositories will only be listed");
        }
        if actions.make_public && actions.make_private {
            warn!("Both public and private requested, repositories will be made private");
        }

        info!(
            account = config.account(),
            organization = config.is_organization(),
            "Enumerating repositories"
        );
        let repositories =
            discover_repositories(&self.host, config.account(), config.is_organization())
                .await?;
        summary.repositories_discovered = repositories.len();

        if actions.clone && !config.dry_run() {
            ensure_directory(&config.account_dir()).await?;
        }

        if repositories.is_empty() {
            info!("No repositories found");
            return Ok(summary);
        }

        if config.dry_run() {
            print_dry_run_preview(config, &repositories);
            return Ok(summary);
        }

        let total = repositories.len();
        for (index, repository) in repositories.iter().enumerate() {
            info!(
                repo = %repository.name_with_owner,
                "Found repository [{}/{}]",
                index + 1,
                total
            );

            let outcome = process_repository(&self.host, &self.cloner, repository, config).await;
            summary.record_outcome(&outcome);
        }

        Ok(summary)
    }
}

/// Creates `path` if it does not exist yet.
async fn ensure_directory(path: &Path) -> Result<(), RunnerError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| RunnerError::OutputDirectory {
            path: path.display().to_string(),
            source: e,
        })?;
    info!(path = %path.display(), "Clone directory ready");
    Ok(())
}

fn print_dry_run_preview(config: &RunConfig, repositories: &[RepositoryRef]) {
    let steps = planned_steps(config.actions());

    println!("\n[DRY RUN] Account: {}", config.account());
    println!("  Found {} repositories:\n", repositories.len());

    for (i, repo) in repositories.iter().enumerate() {
        println!("  [{}/{}] {}", i + 1, repositories.len(), repo.name_with_owner);

        if steps.is_empty() {
            println!("    No actions");
        }
        for step in &steps {
            match step {
                Step::Visibility => {
                    if let Some(visibility) = config.actions().visibility() {
                        println!("    Would make {visibility}");
                    }
                }
                Step::Clone => println!(
                    "    Would clone into {}",
                    config.clone_destination(&repo.name).display()
                ),
                Step::Delete => println!("    Would delete from GitHub"),
            }
        }
    }

    println!();
}
