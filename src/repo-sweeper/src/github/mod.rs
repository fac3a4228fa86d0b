//! GitHub transport.
//!
//! [`RepositoryHost`] is the seam between the sweep logic and GitHub: one
//! GraphQL call for enumeration and two REST calls for mutation. Responses are
//! decoded into typed results here so callers never inspect raw bodies.

mod client;
mod error;
mod graphql;
mod rest;

pub use client::OctocrabHost;
pub use error::ApiError;
pub use graphql::{PageInfo, PageRequest, RepositoryNode, RepositoryPage, PAGE_SIZE};
pub use rest::{parse_delete_response, parse_visibility_response};

use crate::config::Visibility;

/// Remote operations needed to sweep an account.
#[allow(async_fn_in_trait)]
pub trait RepositoryHost {
    /// Fetches one page of the owner's repository connection.
    async fn fetch_repository_page(
        &self,
        request: &PageRequest<'_>,
    ) -> Result<RepositoryPage, ApiError>;

    /// Sets a repository's visibility and returns the `private` value GitHub reports.
    async fn update_visibility(
        &self,
        name_with_owner: &str,
        visibility: Visibility,
    ) -> Result<bool, ApiError>;

    /// Deletes a repository.
    async fn delete_repository(&self, name_with_owner: &str) -> Result<(), ApiError>;
}
