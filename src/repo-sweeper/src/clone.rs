//! Local repository cloning.
//!
//! Clones are performed by the `git` executable. The token is passed as
//! OAuth2-over-HTTP basic credentials (`<token>:x-oauth-basic`) embedded in
//! the clone URL and removed from the remote once the clone completes.

mod error;

pub use error::CloneError;

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;
use url::Url;

/// Password GitHub accepts alongside a token used as the username.
const OAUTH_BASIC_PASSWORD: &str = "x-oauth-basic";

/// Capability to clone a remote repository into a local directory.
#[allow(async_fn_in_trait)]
pub trait RepositoryCloner {
    /// Clones `url` into `destination`, which must not exist or be empty.
    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), CloneError>;
}

/// Clones with the system `git` executable.
#[derive(Clone)]
pub struct GitCloner {
    token: String,
    stall_timeout: Duration,
}

impl GitCloner {
    /// Creates a cloner authenticating with `token`.
    ///
    /// A transfer slower than one byte per second for `stall_timeout` is aborted.
    pub fn new(token: impl Into<String>, stall_timeout: Duration) -> Self {
        Self {
            token: token.into(),
            stall_timeout,
        }
    }

    fn redact(&self, text: &str) -> String {
        if self.token.is_empty() {
            text.to_string()
        } else {
            text.replace(&self.token, "***")
        }
    }

    async fn run_git(&self, args: &[&str], action: &'static str) -> Result<(), CloneError> {
        let low_speed_time = format!("http.lowSpeedTime={}", self.stall_timeout.as_secs().max(1));

        let output = Command::new("git")
            .args(["-c", "http.lowSpeedLimit=1", "-c", &low_speed_time])
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| CloneError::Spawn {
                action,
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CloneError::Failed {
                action,
                message: self.redact(stderr.trim()),
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for GitCloner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitCloner")
            .field("token", &"<redacted>")
            .field("stall_timeout", &self.stall_timeout)
            .finish()
    }
}

impl RepositoryCloner for GitCloner {
    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), CloneError> {
        debug!(url, destination = %destination.display(), "Cloning repository");

        let authenticated = authenticated_url(url, &self.token)?;
        let destination = destination.to_string_lossy().into_owned();

        self.run_git(
            &["clone", "--quiet", authenticated.as_str(), destination.as_str()],
            "clone",
        )
        .await?;

        // Keep the token out of the clone's .git/config.
        self.run_git(
            &["-C", destination.as_str(), "remote", "set-url", "origin", url],
            "remote set-url",
        )
        .await
    }
}

/// Injects `<token>:x-oauth-basic` credentials into an http(s) URL.
pub fn authenticated_url(url: &str, token: &str) -> Result<Url, CloneError> {
    let invalid = |reason: &str| CloneError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let mut parsed = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "https" | "http") {
        return Err(invalid("only http(s) remotes are supported"));
    }

    parsed
        .set_username(token)
        .map_err(|()| invalid("URL cannot carry credentials"))?;
    parsed
        .set_password(Some(OAUTH_BASIC_PASSWORD))
        .map_err(|()| invalid("URL cannot carry credentials"))?;

    Ok(parsed)
}

/// Returns true if `name` can be used as a single directory component.
pub fn is_safe_directory_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_control)
}
