//! Repository enumeration using the GitHub GraphQL API.
//!
//! Walks an account's repository connection page by page and collects every
//! repository the account actually owns.

mod error;
mod repository;

pub use error::EnumerationError;
pub use repository::RepositoryRef;

use crate::github::{PageRequest, RepositoryHost, RepositoryNode};
use std::collections::HashSet;
use tracing::{debug, info, info_span, warn, Instrument};

/// Collects every repository owned by `account`, in API order.
///
/// GitHub may return repositories the account merely has access to; only
/// those whose `nameWithOwner` starts with `<account>/` (case-insensitive)
/// are kept. Repositories seen on an earlier page are skipped.
///
/// # Arguments
///
/// * `host` - GitHub transport
/// * `account` - User or organization login
/// * `is_organization` - Query the organization connection instead of the user one
///
/// # Errors
///
/// Returns [`EnumerationError`] if any page fails. Results from earlier pages
/// are discarded.
pub async fn discover_repositories<H: RepositoryHost>(
    host: &H,
    account: &str,
    is_organization: bool,
) -> Result<Vec<RepositoryRef>, EnumerationError> {
    let span = info_span!("discover", account = %account, organization = is_organization);

    async {
        info!("Starting repository discovery");

        let mut repositories = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor: Option<String> = None;
        let mut has_next_page = true;
        let mut page = 0;

        while has_next_page {
            page += 1;
            let request = PageRequest {
                owner: account,
                is_organization,
                cursor: cursor.as_deref(),
            };

            let result = host
                .fetch_repository_page(&request)
                .await
                .map_err(|source| EnumerationError::Page {
                    account: account.to_string(),
                    page,
                    source,
                })?;

            debug!(page, edges = result.nodes.len(), "Fetched repository page");

            has_next_page = result.page_info.has_next_page;
            cursor = result.page_info.end_cursor;
            if has_next_page && cursor.is_none() {
                return Err(EnumerationError::MissingCursor {
                    account: account.to_string(),
                    page,
                });
            }

            collect_owned(account, result.nodes, &mut seen, &mut repositories);
        }

        info!(count = repositories.len(), pages = page, "Discovery complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Appends nodes owned by `account` that were not collected before.
fn collect_owned(
    account: &str,
    nodes: Vec<RepositoryNode>,
    seen: &mut HashSet<String>,
    repositories: &mut Vec<RepositoryRef>,
) {
    for node in nodes {
        if !is_owned_by(&node.name_with_owner, account) {
            debug!(repo = %node.name_with_owner, "Skipping repository owned by another account");
            continue;
        }

        if !seen.insert(node.name_with_owner.to_lowercase()) {
            warn!(repo = %node.name_with_owner, "Repository returned twice, skipping");
            continue;
        }

        repositories.push(RepositoryRef::from(node));
    }
}

/// Returns true if `name_with_owner` is `<account>/<name>`, ignoring case.
pub fn is_owned_by(name_with_owner: &str, account: &str) -> bool {
    name_with_owner
        .split_once('/')
        .is_some_and(|(owner, _)| owner.to_lowercase() == account.to_lowercase())
}
