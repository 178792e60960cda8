//! Octocrab-backed repository gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use url::Url;

use crate::github::error::ProviderError;
use crate::github::models::{
    ApiBranch, ApiContent, ApiRepository, FileContent, RemoteProjectId, Repository,
};
use crate::github::token::PersonalAccessToken;

use super::RepositoryGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Page size requested when listing branches; GitHub's maximum.
const BRANCHES_PER_PAGE: &str = "100";

/// Placeholder origin used only to percent-encode route paths.
const ROUTE_ROOT: &str = "https://routes.invalid/";

/// Octocrab-backed repository gateway.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and REST API base URL.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Connection` when the base URI cannot be parsed
    /// or Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, ProviderError> {
        let octocrab = build_octocrab_client(token, api_base.as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabRepositoryGateway {
    async fn repository_by_id(&self, id: RemoteProjectId) -> Result<Repository, ProviderError> {
        tracing::debug!("fetching GitHub repository with ID {id}");
        self.client
            .get::<ApiRepository, _, _>(format!("/repositories/{id}"), None::<&()>)
            .await
            .map(ApiRepository::into)
            .map_err(|error| map_octocrab_error("get repository by ID", &error))
    }

    async fn repository_by_owner_and_name(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Repository, ProviderError> {
        tracing::debug!("fetching GitHub repository {owner}/{name}");
        let route = api_route(["repos", owner, name])?;
        self.client
            .get::<ApiRepository, _, _>(route, None::<&()>)
            .await
            .map(ApiRepository::into)
            .map_err(|error| map_octocrab_error("get repository", &error))
    }

    async fn list_branches(&self, repository: &Repository) -> Result<Vec<String>, ProviderError> {
        let route = api_route(
            ["repos", repository.owner_path_segment(), &repository.name, "branches"],
        )?;
        tracing::debug!("listing GitHub branches via {route}");

        let first_page = self
            .client
            .get::<Page<ApiBranch>, _, _>(&route, Some(&[("per_page", BRANCHES_PER_PAGE)]))
            .await
            .map_err(|error| map_octocrab_error("list branches", &error))?;

        self.client
            .all_pages(first_page)
            .await
            .map(|branches| branches.into_iter().map(|branch| branch.name).collect())
            .map_err(|error| map_octocrab_error("list branches", &error))
    }

    async fn file_content(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<FileContent, ProviderError> {
        let route = api_route(
            ["repos", repository.owner_path_segment(), &repository.name, "contents"]
                .into_iter()
                .chain(path.split('/').filter(|segment| !segment.is_empty())),
        )?;
        tracing::debug!("fetching GitHub file content via {route}");

        let response = match repository.default_branch.as_deref() {
            Some(reference) => {
                self.client
                    .get::<ApiContent, _, _>(&route, Some(&[("ref", reference)]))
                    .await
            }
            None => {
                self.client
                    .get::<ApiContent, _, _>(&route, None::<&()>)
                    .await
            }
        };

        response
            .map(ApiContent::into)
            .map_err(|error| map_octocrab_error("get file content", &error))
    }
}

/// Joins `segments` into a REST route, percent-encoding each one.
///
/// Characters such as space, `#` and `?` stay inside their segment instead of
/// ending the path.
fn api_route<'segment>(
    segments: impl IntoIterator<Item = &'segment str>,
) -> Result<String, ProviderError> {
    let route_error = || ProviderError::Api {
        message: "failed to build GitHub route".to_owned(),
    };

    let mut route = Url::parse(ROUTE_ROOT).map_err(|_| route_error())?;
    route
        .path_segments_mut()
        .map_err(|()| route_error())?
        .pop_if_empty()
        .extend(segments);
    Ok(route.path().to_owned())
}
