//! Run configuration.
//!
//! A run is described by an immutable [`RunConfig`]. It can be assembled from
//! command line values layered over an optional TOML file ([`FileConfig`]).

mod error;
mod file;
mod run_config;

pub use error::ConfigError;
pub use file::FileConfig;
pub use run_config::{Actions, RunConfig, Visibility, DEFAULT_TIMEOUT};

use std::time::Duration;
use tracing::debug;

/// Builds a [`RunConfig`] from command line values layered over a config file.
///
/// Values present in `overrides` win; anything missing falls back to `file`.
///
/// # Errors
///
/// Returns [`ConfigError`] if no account is supplied or a value fails validation.
pub fn resolve_run_config(
    overrides: FileConfig,
    file: Option<FileConfig>,
    token: String,
    dry_run: bool,
) -> Result<RunConfig, ConfigError> {
    let file = file.unwrap_or_default();
    let merged = FileConfig {
        account: overrides.account.or(file.account),
        organization: overrides.organization.or(file.organization),
        make_all_public: overrides.make_all_public.or(file.make_all_public),
        make_all_private: overrides.make_all_private.or(file.make_all_private),
        clone_all: overrides.clone_all.or(file.clone_all),
        delete_all: overrides.delete_all.or(file.delete_all),
        output_dir: overrides.output_dir.or(file.output_dir),
        timeout_secs: overrides.timeout_secs.or(file.timeout_secs),
    };
    debug!(?merged, "Resolved settings");

    let account = merged
        .account
        .ok_or(ConfigError::MissingSetting { field: "account" })?;

    let actions = Actions {
        make_public: merged.make_all_public.unwrap_or(false),
        make_private: merged.make_all_private.unwrap_or(false),
        clone: merged.clone_all.unwrap_or(false),
        delete: merged.delete_all.unwrap_or(false),
    };

    let mut config = RunConfig::new(account, token)?
        .with_organization(merged.organization.unwrap_or(false))
        .with_actions(actions)
        .with_dry_run(dry_run);

    if let Some(output_dir) = merged.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if let Some(secs) = merged.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs))?;
    }

    Ok(config)
}
