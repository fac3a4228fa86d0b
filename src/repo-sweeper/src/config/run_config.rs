//! Immutable configuration for a single sweep.

use super::ConfigError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Target visibility for a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to everyone.
    Public,
    /// Visible to the owner and collaborators only.
    Private,
}

impl Visibility {
    /// Value of the REST `private` field for this visibility.
    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
            Visibility::Private => f.write_str("private"),
        }
    }
}

/// The bulk actions requested for every repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    /// Make every repository public.
    pub make_public: bool,
    /// Make every repository private.
    pub make_private: bool,
    /// Clone every repository locally.
    pub clone: bool,
    /// Delete every repository.
    pub delete: bool,
}

impl Actions {
    /// Visibility to apply, if any.
    ///
    /// When both flags are set, private wins.
    pub fn visibility(&self) -> Option<Visibility> {
        if self.make_private {
            Some(Visibility::Private)
        } else if self.make_public {
            Some(Visibility::Public)
        } else {
            None
        }
    }

    /// Returns true if no action is requested.
    pub fn is_empty(&self) -> bool {
        self.visibility().is_none() && !self.clone && !self.delete
    }
}

/// Configuration for one run over an account's repositories.
#[derive(Clone)]
pub struct RunConfig {
    /// Login of the user or organization.
    account: String,
    /// Whether `account` is an organization.
    organization: bool,
    /// GitHub token used for API calls and clones.
    token: String,
    /// Requested bulk actions.
    actions: Actions,
    /// Whether to preview actions without performing them.
    dry_run: bool,
    /// Directory under which `<account>/` is created.
    output_dir: PathBuf,
    /// Per-request timeout.
    timeout: Duration,
}

impl RunConfig {
    /// Creates a configuration for `account` with no actions enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the account is not a
    /// plausible login or the token is empty.
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Result<Self, ConfigError> {
        let account = account.into();
        let token = token.into();
        validate_account(&account)?;

        if token.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "token",
                message: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            account,
            organization: false,
            token,
            actions: Actions::default(),
            dry_run: false,
            output_dir: PathBuf::from("."),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Marks the account as an organization.
    pub fn with_organization(mut self, organization: bool) -> Self {
        self.organization = organization;
        self
    }

    /// Sets the requested actions.
    pub fn with_actions(mut self, actions: Actions) -> Self {
        self.actions = actions;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the directory under which the account folder is created.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Sets the per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ValidationError {
                field: "timeout",
                message: "must be greater than zero".to_string(),
            });
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Returns the account login.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns whether the account is an organization.
    pub fn is_organization(&self) -> bool {
        self.organization
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the requested actions.
    pub fn actions(&self) -> Actions {
        self.actions
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Root directory that receives one clone per repository.
    pub fn account_dir(&self) -> PathBuf {
        self.output_dir.join(&self.account)
    }

    /// Local destination for a repository clone: `<output>/<account>/<name>`.
    pub fn clone_destination(&self, repository_name: &str) -> PathBuf {
        self.account_dir().join(repository_name)
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("account", &self.account)
            .field("organization", &self.organization)
            .field("token", &"<redacted>")
            .field("actions", &self.actions)
            .field("dry_run", &self.dry_run)
            .field("output_dir", &self.output_dir)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn validate_account(account: &str) -> Result<(), ConfigError> {
    if account.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "account",
            message: "must not be empty".to_string(),
        });
    }

    if account.contains('/') || account.contains('\\') || account.chars().any(char::is_whitespace) {
        return Err(ConfigError::ValidationError {
            field: "account",
            message: format!("'{account}' is not a valid login"),
        });
    }

    if account == "." || account == ".." {
        return Err(ConfigError::ValidationError {
            field: "account",
            message: format!("'{account}' is not a valid login"),
        });
    }

    Ok(())
}
