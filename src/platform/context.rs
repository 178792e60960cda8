//! Request-scoped deadline supplied by the platform.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::github::error::ProviderError;

/// Request context carried by [`super::BaseClient`].
///
/// Cancellation is expressed by dropping the operation's future. The optional
/// deadline bounds every provider call made on behalf of the request; adapters
/// apply it but never create or extend one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context without a deadline.
    #[must_use]
    pub const fn background() -> Self {
        Self { deadline: None }
    }

    /// Context whose deadline lies `timeout` from now.
    ///
    /// A timeout too large to represent leaves the context without a deadline.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Context expiring at `deadline`.
    #[must_use]
    pub const fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// The deadline, if one was set.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Runs a provider call under this context's deadline.
    ///
    /// An already expired deadline fails without polling `call`.
    pub(crate) async fn run<F, T>(&self, operation: &str, call: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        let Some(deadline) = self.deadline else {
            return call.await;
        };

        let expired = || ProviderError::DeadlineExceeded {
            operation: operation.to_owned(),
        };

        if deadline <= Instant::now() {
            return Err(expired());
        }

        tokio::time::timeout_at(deadline, call)
            .await
            .map_err(|_elapsed| expired())?
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;
    use tokio::time::Instant;

    use super::RequestContext;
    use crate::github::error::ProviderError;

    #[rstest]
    #[tokio::test]
    async fn background_context_passes_results_through() {
        let context = RequestContext::background();
        let result = context.run("lookup", async { Ok::<_, ProviderError>(7_u8) }).await;
        assert_eq!(result, Ok(7));
    }

    #[rstest]
    #[tokio::test]
    async fn expired_deadline_fails_immediately() {
        let context = RequestContext::with_deadline(Instant::now());
        let result = context
            .run(
                "get repository",
                std::future::pending::<Result<(), ProviderError>>(),
            )
            .await;

        assert_eq!(
            result,
            Err(ProviderError::DeadlineExceeded {
                operation: "get repository".to_owned(),
            })
        );
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn slow_call_is_cut_off_at_the_deadline() {
        let context = RequestContext::with_timeout(Duration::from_secs(5));
        let result = context
            .run("list branches", async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, ProviderError>(())
            })
            .await;

        assert!(
            matches!(result, Err(ProviderError::DeadlineExceeded { .. })),
            "expected DeadlineExceeded, got {result:?}"
        );
    }

    #[rstest]
    fn huge_timeout_leaves_context_unbounded() {
        let context = RequestContext::with_timeout(Duration::MAX);
        assert!(context.deadline().is_none());
    }
}
