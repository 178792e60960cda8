//! GitHub implementation of the platform's remote provider capability.
//!
//! `GitHubProvider` builds a fresh Octocrab client for every call from the
//! platform-owned [`BaseClient`], resolves project identifiers, and hands the
//! work to [`RepositoryAdapter`]. The inherent methods are strict; the
//! [`RemoteProvider`] implementation layers the platform's lenient contract on
//! top of them.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::github::adapter::{RepositoryAdapter, project_identifier};
use crate::github::api_base::derive_api_base;
use crate::github::error::ProviderError;
use crate::github::gateway::OctocrabRepositoryGateway;
use crate::github::models::{CloneProtocol, Repository};
use crate::github::token::PersonalAccessToken;
use crate::platform::{BaseClient, ProjectIdentifier, RemoteProvider, WharfBranch, WharfProject};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Remote provider adapter for GitHub and GitHub Enterprise.
pub struct GitHubProvider {
    base: BaseClient,
    clone_protocol: CloneProtocol,
    telemetry: Arc<dyn TelemetrySink>,
}

impl GitHubProvider {
    /// Creates a provider over the platform's client settings.
    ///
    /// Reports HTTPS clone URLs and drops telemetry until configured
    /// otherwise.
    #[must_use]
    pub fn new(base: BaseClient) -> Self {
        Self {
            base,
            clone_protocol: CloneProtocol::default(),
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Selects which clone URL is reported as a project's git URL.
    #[must_use]
    pub const fn with_clone_protocol(mut self, clone_protocol: CloneProtocol) -> Self {
        self.clone_protocol = clone_protocol;
        self
    }

    /// Routes suppressed-failure events to `telemetry`.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// The platform settings this provider was created with.
    #[must_use]
    pub const fn base_client(&self) -> &BaseClient {
        &self.base
    }

    /// Builds an authenticated gateway from the platform settings.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MissingToken` for a blank token and
    /// `ProviderError::Connection` when the remote provider URL cannot be
    /// turned into an API client.
    pub fn init_client(&self) -> Result<OctocrabRepositoryGateway, ProviderError> {
        let token = PersonalAccessToken::new(self.base.token())?;
        let api_base = derive_api_base(self.base.remote_provider_url())?;
        tracing::debug!("initialising GitHub client for {api_base}");
        OctocrabRepositoryGateway::for_token(&token, &api_base)
    }

    /// Resolves a project identifier to its repository.
    ///
    /// # Errors
    ///
    /// Returns client initialisation errors, `ProviderError::InvalidIdentifier`
    /// for malformed identifiers and `ProviderError::RepositoryLookup` when
    /// GitHub cannot return the repository.
    pub async fn resolve_repository(
        &self,
        identifier: &ProjectIdentifier,
    ) -> Result<Repository, ProviderError> {
        let gateway = self.init_client()?;
        self.adapter(&gateway).resolve_repository(identifier).await
    }

    /// Reads `file_name` from the project's default branch.
    ///
    /// # Errors
    ///
    /// Returns every failure, including initialisation and resolution
    /// failures; use [`ProviderError::is_not_found`] to detect a missing file.
    pub async fn read_file(
        &self,
        identifier: &ProjectIdentifier,
        file_name: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let gateway = self.init_client()?;
        let adapter = self.adapter(&gateway);
        let repository = adapter.resolve_repository(identifier).await?;
        adapter.file_content(&repository, file_name).await
    }

    /// Lists the project's branches, flagging the default one.
    ///
    /// # Errors
    ///
    /// Returns every failure, including initialisation and resolution
    /// failures.
    pub async fn list_branches(
        &self,
        identifier: &ProjectIdentifier,
    ) -> Result<Vec<WharfBranch>, ProviderError> {
        let gateway = self.init_client()?;
        let adapter = self.adapter(&gateway);
        let repository = adapter.resolve_repository(identifier).await?;
        adapter.branches(&repository).await
    }

    /// Finds a project by group (owner) and project (repository) name.
    ///
    /// # Errors
    ///
    /// Returns client initialisation errors and `ProviderError::ProjectLookup`
    /// when GitHub cannot return the repository.
    pub async fn find_project(
        &self,
        group_name: &str,
        project_name: &str,
    ) -> Result<WharfProject, ProviderError> {
        let gateway = self.init_client()?;
        self.adapter(&gateway)
            .project_by_group_and_name(group_name, project_name)
            .await
    }

    const fn adapter<'client>(
        &'client self,
        gateway: &'client OctocrabRepositoryGateway,
    ) -> RepositoryAdapter<'client, OctocrabRepositoryGateway> {
        RepositoryAdapter::new(gateway, &self.base, self.clone_protocol)
    }

    fn suppress<T: Default>(&self, operation: &str, error: &ProviderError) -> T {
        tracing::warn!("{operation} returned an empty result after failure: {error}");
        self.telemetry.record(TelemetryEvent::FailureSuppressed {
            operation: operation.to_owned(),
            reason: error.to_string(),
        });
        T::default()
    }
}

impl fmt::Debug for GitHubProvider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GitHubProvider")
            .field("base", &self.base)
            .field("clone_protocol", &self.clone_protocol)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RemoteProvider for GitHubProvider {
    async fn fetch_file(
        &self,
        identifier: &ProjectIdentifier,
        file_name: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let gateway = match self.init_client() {
            Ok(gateway) => gateway,
            Err(error) => return Ok(self.suppress("fetch_file", &error)),
        };
        let adapter = self.adapter(&gateway);
        let repository = match adapter.resolve_repository(identifier).await {
            Ok(repository) => repository,
            Err(error) => return Ok(self.suppress("fetch_file", &error)),
        };
        adapter.file_content(&repository, file_name).await
    }

    async fn fetch_branches(
        &self,
        identifier: &ProjectIdentifier,
    ) -> Result<Vec<WharfBranch>, ProviderError> {
        let gateway = match self.init_client() {
            Ok(gateway) => gateway,
            Err(error) => return Ok(self.suppress("fetch_branches", &error)),
        };
        let adapter = self.adapter(&gateway);
        let repository = match adapter.resolve_repository(identifier).await {
            Ok(repository) => repository,
            Err(error) => return Ok(self.suppress("fetch_branches", &error)),
        };
        adapter.branches(&repository).await
    }

    async fn fetch_project_by_group_and_project_name(
        &self,
        group_name: &str,
        project_name: &str,
    ) -> Result<WharfProject, ProviderError> {
        self.find_project(group_name, project_name).await
    }

    fn wharf_project_to_identifier(&self, project: &WharfProject) -> ProjectIdentifier {
        project_identifier(project)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
