//! GraphQL query and response schema for repository enumeration.

use super::ApiError;
use serde::{Deserialize, Serialize};

/// Repositories requested per page. GitHub caps connections at 100.
pub const PAGE_SIZE: u8 = 100;

/// Fetches one page of an owner's repositories.
///
/// A single query serves both users and organizations: `$isOrg` selects which
/// root field is included, so the pagination loop stays the same for both.
pub const REPOSITORIES_QUERY: &str = r#"
query getRepos($owner: String!, $isOrg: Boolean!, $cursor: String, $first: Int!) {
  organization(login: $owner) @include(if: $isOrg) {
    repositories(first: $first, after: $cursor) {
      ...repos
    }
  }
  user(login: $owner) @skip(if: $isOrg) {
    repositories(first: $first, after: $cursor) {
      ...repos
    }
  }
}

fragment repos on RepositoryConnection {
  pageInfo {
    endCursor
    hasNextPage
  }
  edges {
    node {
      name
      nameWithOwner
      url
    }
  }
}
"#;

/// Parameters of one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<'a> {
    /// Account login.
    pub owner: &'a str,
    /// Whether to query the organization root field instead of the user one.
    pub is_organization: bool,
    /// Continuation token; `None` starts from the beginning.
    pub cursor: Option<&'a str>,
}

impl PageRequest<'_> {
    fn owner_kind(&self) -> &'static str {
        if self.is_organization {
            "organization"
        } else {
            "user"
        }
    }

    /// Request body for the GraphQL endpoint.
    pub(crate) fn payload(&self) -> GraphQlPayload<'_> {
        GraphQlPayload {
            query: REPOSITORIES_QUERY,
            variables: Variables {
                owner: self.owner,
                is_org: self.is_organization,
                cursor: self.cursor,
                first: PAGE_SIZE,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlPayload<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    owner: &'a str,
    is_org: bool,
    cursor: Option<&'a str>,
    first: u8,
}

/// Pagination state reported by a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the last edge on this page.
    pub end_cursor: Option<String>,
    /// Whether another page follows.
    pub has_next_page: bool,
}

/// A repository as returned by the GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    pub name_with_owner: String,
    pub url: String,
}

/// One decoded page of repositories, in API order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryPage {
    pub page_info: PageInfo,
    pub nodes: Vec<RepositoryNode>,
}

/// Raw GraphQL envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RepositoriesResponse {
    data: Option<OwnerData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct OwnerData {
    organization: Option<RepositoryOwner>,
    user: Option<RepositoryOwner>,
}

#[derive(Debug, Deserialize)]
struct RepositoryOwner {
    repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryConnection {
    page_info: PageInfo,
    #[serde(default)]
    edges: Vec<RepositoryEdge>,
}

#[derive(Debug, Deserialize)]
struct RepositoryEdge {
    node: Option<RepositoryNode>,
}

impl RepositoriesResponse {
    /// Turns the envelope into a page, surfacing the first GraphQL error.
    pub(crate) fn into_page(self, request: &PageRequest<'_>) -> Result<RepositoryPage, ApiError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(ApiError::GitHub {
                status: None,
                message: error.message,
            });
        }

        let missing_owner = || ApiError::MissingOwner {
            owner: request.owner.to_string(),
            kind: request.owner_kind(),
        };

        let data = self.data.ok_or_else(missing_owner)?;
        let owner = if request.is_organization {
            data.organization
        } else {
            data.user
        };
        let connection = owner.ok_or_else(missing_owner)?.repositories;

        Ok(RepositoryPage {
            page_info: connection.page_info,
            nodes: connection
                .edges
                .into_iter()
                .filter_map(|edge| edge.node)
                .collect(),
        })
    }
}
