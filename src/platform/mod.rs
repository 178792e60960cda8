//! Platform-side contract shared by every remote provider adapter.
//!
//! The CI/CD platform addresses projects through opaque identifiers and
//! consumes provider-neutral project, branch and file records. This module
//! holds those records, the per-call client bundle the platform hands to
//! adapters, and the capability trait adapters implement.

mod base_client;
mod context;
mod identifier;
mod models;

pub use base_client::BaseClient;
pub use context::RequestContext;
pub use identifier::ProjectIdentifier;
pub use models::{WharfBranch, WharfProject};

use async_trait::async_trait;

use crate::github::error::ProviderError;

/// Capability set the platform expects from a remote provider.
///
/// `fetch_file` and `fetch_branches` follow the platform's lenient contract:
/// when the client cannot be initialised or the identifier does not resolve,
/// they succeed with an empty result. Failures after resolution propagate.
#[async_trait]
pub trait RemoteProvider: Send + Sync {
    /// Fetch a file's raw content from the project's default branch.
    async fn fetch_file(
        &self,
        identifier: &ProjectIdentifier,
        file_name: &str,
    ) -> Result<Vec<u8>, ProviderError>;

    /// Fetch every branch of the project, flagging the default one.
    async fn fetch_branches(
        &self,
        identifier: &ProjectIdentifier,
    ) -> Result<Vec<WharfBranch>, ProviderError>;

    /// Look a project up by its group (owner) and project name.
    async fn fetch_project_by_group_and_project_name(
        &self,
        group_name: &str,
        project_name: &str,
    ) -> Result<WharfProject, ProviderError>;

    /// Build the identifier that re-addresses a previously fetched project.
    fn wharf_project_to_identifier(&self, project: &WharfProject) -> ProjectIdentifier;
}
