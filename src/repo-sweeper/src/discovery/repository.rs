//! Enumerated repository reference.

use crate::github::RepositoryNode;
use serde::Serialize;

/// A repository owned by the swept account.
///
/// Created once during enumeration and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRef {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub name_with_owner: String,

    /// Remote URL to clone from.
    pub clone_url: String,
}

impl From<RepositoryNode> for RepositoryRef {
    fn from(node: RepositoryNode) -> Self {
        Self {
            name: node.name,
            name_with_owner: node.name_with_owner,
            clone_url: node.url,
        }
    }
}
