//! [`RepositoryHost`] backed by an authenticated octocrab client.

use super::graphql::{PageRequest, RepositoriesResponse, RepositoryPage};
use super::rest::{parse_delete_response, parse_visibility_response, repository_route};
use super::{ApiError, RepositoryHost};
use crate::config::Visibility;
use octocrab::Octocrab;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Talks to api.github.com with a personal access token.
#[derive(Debug, Clone)]
pub struct OctocrabHost {
    octocrab: Octocrab,
}

impl OctocrabHost {
    /// Builds a client authenticated with `token`.
    ///
    /// `timeout` bounds both connecting and reading each response.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: &str, timeout: Duration) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .set_connect_timeout(Some(timeout))
            .set_read_timeout(Some(timeout))
            .build()?;
        Ok(Self::from_octocrab(octocrab))
    }

    /// Wraps an existing client, e.g. one pointed at another base URI.
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

impl RepositoryHost for OctocrabHost {
    async fn fetch_repository_page(
        &self,
        request: &PageRequest<'_>,
    ) -> Result<RepositoryPage, ApiError> {
        debug!(owner = request.owner, cursor = ?request.cursor, "Querying repositories");

        let response: RepositoriesResponse = self.octocrab.graphql(&request.payload()).await?;
        response.into_page(request)
    }

    async fn update_visibility(
        &self,
        name_with_owner: &str,
        visibility: Visibility,
    ) -> Result<bool, ApiError> {
        let body = json!({ "private": visibility.is_private() });
        let response = self
            .octocrab
            ._patch(repository_route(name_with_owner), Some(&body))
            .await?;

        let status = response.status().as_u16();
        let body = self.octocrab.body_to_string(response).await?;
        debug!(status, "Repository update responded");

        parse_visibility_response(status, &body)
    }

    async fn delete_repository(&self, name_with_owner: &str) -> Result<(), ApiError> {
        let response = self
            .octocrab
            ._delete(repository_route(name_with_owner), None::<&()>)
            .await?;

        let status = response.status().as_u16();
        let body = self.octocrab.body_to_string(response).await?;
        debug!(status, "Repository delete responded");

        parse_delete_response(status, &body)
    }
}
