//! Identifier resolution and field mapping between GitHub and the platform.
//!
//! `RepositoryAdapter` holds every translation rule of the provider: how a
//! [`ProjectIdentifier`] addresses a repository, how repository payloads map
//! onto [`WharfProject`], and how the default branch is flagged. It talks to
//! GitHub only through [`RepositoryGateway`], and applies the platform's
//! request deadline to each call.

use crate::github::error::ProviderError;
use crate::github::gateway::RepositoryGateway;
use crate::github::models::{CloneProtocol, RemoteProjectId, Repository};
use crate::platform::{BaseClient, ProjectIdentifier, WharfBranch, WharfProject};

/// Strict translation of platform requests onto a repository gateway.
pub struct RepositoryAdapter<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    gateway: &'client Gateway,
    base: &'client BaseClient,
    clone_protocol: CloneProtocol,
}

impl<'client, Gateway> RepositoryAdapter<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create an adapter over `gateway` for the platform's `base` client.
    #[must_use]
    pub const fn new(
        gateway: &'client Gateway,
        base: &'client BaseClient,
        clone_protocol: CloneProtocol,
    ) -> Self {
        Self {
            gateway,
            base,
            clone_protocol,
        }
    }

    /// Resolve a project identifier to the repository it addresses.
    ///
    /// The first identifier value must be a repository ID. It is validated
    /// before any request is made.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidIdentifier` when the identifier is empty
    /// or not a repository ID, and `ProviderError::RepositoryLookup` wrapping
    /// the gateway failure when the lookup fails.
    pub async fn resolve_repository(
        &self,
        identifier: &ProjectIdentifier,
    ) -> Result<Repository, ProviderError> {
        let raw_id = identifier
            .first()
            .ok_or_else(|| ProviderError::InvalidIdentifier {
                value: String::new(),
                message: "identifier carries no values".to_owned(),
            })?;
        let id = RemoteProjectId::parse(raw_id)?;
        tracing::debug!(
            "resolving repository {id} on {}",
            self.base.remote_provider_url()
        );

        self.base
            .context()
            .run("get repository by ID", self.gateway.repository_by_id(id))
            .await
            .map_err(|source| ProviderError::RepositoryLookup {
                remote_project_id: raw_id.to_owned(),
                base_url: self.base.remote_provider_url().to_owned(),
                source: Box::new(source),
            })
    }

    /// Fetch and decode `file_name` from the repository's default branch.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures, including `ProviderError::NotFound` for a
    /// missing file, and returns `ProviderError::Decode` for payloads that are
    /// not valid base64.
    pub async fn file_content(
        &self,
        repository: &Repository,
        file_name: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        self.base
            .context()
            .run(
                "get file content",
                self.gateway.file_content(repository, file_name),
            )
            .await?
            .decode()
    }

    /// List the repository's branches, flagging the default branch.
    ///
    /// Every branch whose name equals the repository's default branch name is
    /// flagged; the listing is otherwise passed through as GitHub returns it.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn branches(&self, repository: &Repository) -> Result<Vec<WharfBranch>, ProviderError> {
        let names = self
            .base
            .context()
            .run("list branches", self.gateway.list_branches(repository))
            .await?;

        let default_branch = repository.default_branch.as_deref();
        Ok(names
            .into_iter()
            .map(|name| WharfBranch {
                default: default_branch == Some(name.as_str()),
                name,
            })
            .collect())
    }

    /// Look a project up by group (owner) and project (repository) name.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ProjectLookup` wrapping the gateway failure,
    /// attributed to the group/name pair and the configured base URL.
    pub async fn project_by_group_and_name(
        &self,
        group_name: &str,
        project_name: &str,
    ) -> Result<WharfProject, ProviderError> {
        tracing::debug!(
            "looking up project {group_name}/{project_name} on {}",
            self.base.remote_provider_url()
        );
        self.base
            .context()
            .run(
                "get repository",
                self.gateway
                    .repository_by_owner_and_name(group_name, project_name),
            )
            .await
            .map(|repository| self.to_wharf_project(&repository))
            .map_err(|source| ProviderError::ProjectLookup {
                group_name: group_name.to_owned(),
                project_name: project_name.to_owned(),
                base_url: self.base.remote_provider_url().to_owned(),
                source: Box::new(source),
            })
    }

    /// Map a repository onto the platform's project record.
    #[must_use]
    pub fn to_wharf_project(&self, repository: &Repository) -> WharfProject {
        WharfProject {
            name: repository.name.clone(),
            group_name: repository.owner_path_segment().to_owned(),
            description: repository.description.clone(),
            avatar_url: repository.owner.avatar_url.clone(),
            git_url: repository
                .git_url(self.clone_protocol)
                .map(ToOwned::to_owned),
            remote_project_id: repository.id.to_string(),
        }
    }
}

/// Wraps a project's remote ID in the single-value identifier GitHub uses.
#[must_use]
pub fn project_identifier(project: &WharfProject) -> ProjectIdentifier {
    ProjectIdentifier::single(project.remote_project_id.as_str())
}
