//! Error types exposed by the GitHub provider adapter.

use thiserror::Error;

/// Errors surfaced while translating platform requests into GitHub calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The Octocrab client could not be constructed.
    #[error("failed connecting to GitHub using remote provider URL {base_url:?}: {message}")]
    Connection {
        /// Remote provider URL the client was built for.
        base_url: String,
        /// Reason the construction failed.
        message: String,
    },

    /// The authentication token was missing or blank.
    #[error("personal access token is required")]
    MissingToken,

    /// The project identifier does not address a GitHub repository.
    #[error("parsing remote project id failed {value:?}: {message}")]
    InvalidIdentifier {
        /// Raw identifier value, empty when the identifier had no values.
        value: String,
        /// Why the value was rejected.
        message: String,
    },

    /// GitHub reported that the resource does not exist or is not visible.
    #[error("GitHub resource not found: {message}")]
    NotFound {
        /// Operation and response detail.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub refused the request because the rate limit is exhausted.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body or client detail describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// File content returned by GitHub could not be decoded.
    #[error("decoding file content failed: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The deadline carried by the request context elapsed.
    #[error("{operation} did not complete before the request deadline")]
    DeadlineExceeded {
        /// Provider call that was cut short.
        operation: String,
    },

    /// Looking a repository up by its numeric ID failed.
    #[error(
        "fetching GitHub project with ID {remote_project_id:?} failed on {base_url:?}: {source}"
    )]
    RepositoryLookup {
        /// Identifier value that was looked up.
        remote_project_id: String,
        /// Remote provider URL the lookup ran against.
        base_url: String,
        /// Underlying provider failure.
        source: Box<ProviderError>,
    },

    /// Looking a repository up by owner and name failed.
    #[error(
        "fetching GitHub project '{group_name}/{project_name}' failed on {base_url:?}: {source}"
    )]
    ProjectLookup {
        /// Owner (group) that was looked up.
        group_name: String,
        /// Repository (project) name that was looked up.
        project_name: String,
        /// Remote provider URL the lookup ran against.
        base_url: String,
        /// Underlying provider failure.
        source: Box<ProviderError>,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ProviderError {
    /// Returns true when the failure means the addressed resource is absent,
    /// looking through lookup context wrappers.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::RepositoryLookup { source, .. } | Self::ProjectLookup { source, .. } => {
                source.is_not_found()
            }
            _ => false,
        }
    }
}
