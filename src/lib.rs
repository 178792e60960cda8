//! GitHub remote provider adapter for the Wharf CI/CD platform.
//!
//! The platform addresses projects through opaque identifiers and asks its
//! providers for pipeline definition files, branch listings and project
//! metadata. This crate answers those requests against GitHub or GitHub
//! Enterprise through Octocrab, and maps the results onto the platform's
//! provider-neutral records.

pub mod config;
pub mod github;
pub mod platform;
pub mod telemetry;

pub use config::ProviderConfig;
pub use github::{CloneProtocol, GitHubProvider, ProviderError};
pub use platform::{
    BaseClient, ProjectIdentifier, RemoteProvider, RequestContext, WharfBranch, WharfProject,
};
