//! Provider configuration loaded from CLI, environment, and files.
//!
//! The adapter itself never reads this module. Inside Wharf the platform hands
//! every call a [`BaseClient`] and nothing here is consulted. `ProviderConfig`
//! exists only for standalone hosts (tools, smoke tests) that need to build a
//! [`BaseClient`] and a ready [`GitHubProvider`] themselves, using
//! ortho-config's layered loading.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in defaults
//! 2. **Configuration file** – `.wharf-github.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `WHARF_GITHUB_TOKEN`,
//!    `WHARF_GITHUB_REMOTE_PROVIDER_URL`, ... or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t`, `--remote-provider-url`/`-u`
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! remote_provider_url = "https://ghe.example.com"
//! request_timeout_seconds = 30
//! clone_protocol = "ssh"
//! telemetry_stderr = true
//! ```

use std::env;
use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ProviderError;
use crate::github::models::CloneProtocol;
use crate::github::provider::GitHubProvider;
use crate::platform::{BaseClient, RequestContext};
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

/// URL used when no remote provider URL is configured.
pub const DEFAULT_REMOTE_PROVIDER_URL: &str = "https://api.github.com";

/// Provider configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use wharf_provider_github::ProviderConfig;
///
/// let config = ProviderConfig::load().expect("failed to load configuration");
/// let provider = config.provider().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "WHARF_GITHUB",
    discovery(
        dotfile_name = ".wharf-github.toml",
        config_file_name = "wharf-github.toml",
        app_name = "wharf-github"
    )
)]
pub struct ProviderConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `WHARF_GITHUB_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub or GitHub Enterprise URL; the REST API base is derived from it.
    ///
    /// Can be provided via:
    /// - CLI: `--remote-provider-url <URL>` or `-u <URL>`
    /// - Environment: `WHARF_GITHUB_REMOTE_PROVIDER_URL`
    /// - Config file: `remote_provider_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub remote_provider_url: String,

    /// Time budget for each platform request, in seconds.
    ///
    /// Unset means provider calls run without a deadline.
    #[ortho_config()]
    pub request_timeout_seconds: Option<u64>,

    /// Clone URL reported for projects: `https` or `ssh`.
    #[ortho_config()]
    pub clone_protocol: String,

    /// Writes suppressed-failure telemetry to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry-stderr`
    /// - Config file: `telemetry_stderr = true`
    #[ortho_config()]
    pub telemetry_stderr: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            token: None,
            remote_provider_url: DEFAULT_REMOTE_PROVIDER_URL.to_owned(),
            request_timeout_seconds: None,
            clone_protocol: CloneProtocol::default().as_str().to_owned(),
            telemetry_stderr: false,
        }
    }
}

impl ProviderConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, ProviderError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ProviderError::MissingToken)
    }

    /// Parses the configured clone protocol.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Configuration`] for values other than `https`
    /// and `ssh`.
    pub fn clone_protocol(&self) -> Result<CloneProtocol, ProviderError> {
        self.clone_protocol.parse()
    }

    /// Request context carrying the configured timeout.
    ///
    /// The deadline starts counting when this is called.
    #[must_use]
    pub fn request_context(&self) -> RequestContext {
        self.request_timeout_seconds
            .map_or_else(RequestContext::background, |seconds| {
                RequestContext::with_timeout(Duration::from_secs(seconds))
            })
    }

    /// Bundles token, URL and request context for the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingToken`] when no token is configured.
    pub fn base_client(&self) -> Result<BaseClient, ProviderError> {
        let token = self.resolve_token()?;
        Ok(BaseClient::new(
            token,
            self.remote_provider_url.as_str(),
            self.request_context(),
        ))
    }

    /// Telemetry sink selected by `telemetry_stderr`.
    #[must_use]
    pub fn telemetry_sink(&self) -> Arc<dyn TelemetrySink> {
        if self.telemetry_stderr {
            Arc::new(StderrJsonlTelemetrySink)
        } else {
            Arc::new(NoopTelemetrySink)
        }
    }

    /// Builds a provider from this configuration.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::base_client`] and
    /// [`Self::clone_protocol`].
    pub fn provider(&self) -> Result<GitHubProvider, ProviderError> {
        let clone_protocol = self.clone_protocol()?;
        Ok(GitHubProvider::new(self.base_client()?)
            .with_clone_protocol(clone_protocol)
            .with_telemetry(self.telemetry_sink()))
    }
}

#[cfg(test)]
mod tests;
