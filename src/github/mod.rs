//! GitHub remote provider adapter.
//!
//! Octocrab sits behind [`RepositoryGateway`]; [`RepositoryAdapter`] maps
//! repositories, branches and file content onto platform records; and
//! [`GitHubProvider`] ties both to the platform's [`crate::platform::BaseClient`]
//! and implements [`crate::platform::RemoteProvider`].

pub mod adapter;
pub mod api_base;
pub mod error;
pub mod gateway;
pub mod models;
pub mod provider;
pub mod token;

pub use adapter::{RepositoryAdapter, project_identifier};
pub use api_base::derive_api_base;
pub use error::ProviderError;
pub use gateway::{OctocrabRepositoryGateway, RepositoryGateway};
pub use models::{CloneProtocol, FileContent, RemoteProjectId, Repository, RepositoryOwner};
pub use provider::GitHubProvider;
pub use token::PersonalAccessToken;

#[cfg(test)]
pub use gateway::MockRepositoryGateway;
