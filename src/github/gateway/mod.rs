//! Gateway for loading repository data through Octocrab.
//!
//! The trait exposes only the four calls the adapter needs, so the mapping
//! logic can be exercised against a mock while the Octocrab implementation
//! handles real HTTP requests.

mod client;
mod error_mapping;
mod repository;

pub use repository::OctocrabRepositoryGateway;

use async_trait::async_trait;

use crate::github::error::ProviderError;
use crate::github::models::{FileContent, RemoteProjectId, Repository};

/// Gateway for repository-level GitHub operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetch a repository by its numeric ID.
    async fn repository_by_id(&self, id: RemoteProjectId) -> Result<Repository, ProviderError>;

    /// Fetch a repository by owner login and repository name.
    async fn repository_by_owner_and_name(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Repository, ProviderError>;

    /// List the names of every branch, following pagination.
    async fn list_branches(&self, repository: &Repository) -> Result<Vec<String>, ProviderError>;

    /// Fetch the encoded content of `path` at the repository's default branch.
    async fn file_content(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<FileContent, ProviderError>;
}
