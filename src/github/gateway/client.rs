//! Octocrab client construction for the repository gateway.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::ProviderError;
use crate::github::token::PersonalAccessToken;

/// Builds an Octocrab client for the given token and API base URL.
///
/// Octocrab's retry layer is disabled so that every provider call is
/// attempted exactly once.
///
/// # Errors
///
/// Returns `ProviderError::Connection` when the base URI cannot be parsed or
/// Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, ProviderError> {
    let connection_error = |message: String| ProviderError::Connection {
        base_url: api_base.to_owned(),
        message,
    };

    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| connection_error(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .add_retry_config(RetryConfig::None)
        .base_uri(base_uri)
        .map_err(|error| connection_error(format!("build client failed: {error}")))?
        .build()
        .map_err(|error| connection_error(format!("build client failed: {error}")))
}
