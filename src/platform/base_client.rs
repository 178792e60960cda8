//! Authentication and context bundle handed to provider adapters.

use super::context::RequestContext;

/// Shared client settings owned by the platform.
///
/// Adapters only read from it; every provider call derives its own API client
/// from these values.
#[derive(Clone, PartialEq, Eq)]
pub struct BaseClient {
    token: String,
    remote_provider_url: String,
    context: RequestContext,
}

impl BaseClient {
    /// Bundles a token, provider URL and request context.
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        remote_provider_url: impl Into<String>,
        context: RequestContext,
    ) -> Self {
        Self {
            token: token.into(),
            remote_provider_url: remote_provider_url.into(),
            context,
        }
    }

    /// Raw authentication token as supplied by the platform.
    #[must_use]
    pub const fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Remote provider URL as configured on the platform.
    #[must_use]
    pub const fn remote_provider_url(&self) -> &str {
        self.remote_provider_url.as_str()
    }

    /// Request-scoped context.
    #[must_use]
    pub const fn context(&self) -> &RequestContext {
        &self.context
    }
}

impl std::fmt::Debug for BaseClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BaseClient")
            .field("token", &"***")
            .field("remote_provider_url", &self.remote_provider_url)
            .field("context", &self.context)
            .finish()
    }
}
