//! On-disk run configuration.

use super::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings read from a TOML config file.
///
/// Every field is optional; command line values take precedence over the file.
///
/// ```toml
/// account = "acme"
/// organization = true
/// make-all-private = true
/// clone-all = true
/// output-dir = "backups"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /// Login of the user or organization to sweep.
    pub account: Option<String>,

    /// Whether the account is an organization.
    pub organization: Option<bool>,

    /// Make every repository public.
    pub make_all_public: Option<bool>,

    /// Make every repository private.
    pub make_all_private: Option<bool>,

    /// Clone every repository locally.
    pub clone_all: Option<bool>,

    /// Delete every repository.
    pub delete_all: Option<bool>,

    /// Directory under which the account folder is created.
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Loads a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }
}
