//! Error mapping helpers for the Octocrab repository gateway.

use http::StatusCode;

use crate::github::error::ProviderError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

/// Classifies a GitHub error response by status.
pub(super) fn map_github_error(
    operation: &str,
    status: StatusCode,
    message: &str,
    is_rate_limited: bool,
) -> ProviderError {
    if status == StatusCode::NOT_FOUND {
        return ProviderError::NotFound {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        };
    }

    if is_rate_limited {
        return ProviderError::RateLimitExceeded {
            message: format!("{operation} failed: {message}"),
        };
    }

    if is_auth_failure(status) {
        ProviderError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        ProviderError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ProviderError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_github_error(
            operation,
            source.status_code,
            &source.message,
            is_rate_limit_error(source),
        );
    }

    if is_network_error(error) {
        return ProviderError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ProviderError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::{is_auth_failure, map_github_error};
    use crate::github::error::ProviderError;

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, true)]
    #[case::forbidden(StatusCode::FORBIDDEN, true)]
    #[case::not_found(StatusCode::NOT_FOUND, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn detects_auth_failures(#[case] status: StatusCode, #[case] expected: bool) {
        assert_eq!(is_auth_failure(status), expected);
    }

    #[rstest]
    fn not_found_wins_over_other_classifications() {
        let error = map_github_error("get repository", StatusCode::NOT_FOUND, "Not Found", false);
        assert_eq!(
            error,
            ProviderError::NotFound {
                message: "get repository failed: GitHub returned 404 Not Found Not Found"
                    .to_owned(),
            }
        );
    }

    #[rstest]
    #[case::rate_limited(StatusCode::FORBIDDEN, true, "RateLimitExceeded")]
    #[case::forbidden(StatusCode::FORBIDDEN, false, "Authentication")]
    #[case::unprocessable(StatusCode::UNPROCESSABLE_ENTITY, false, "Api")]
    fn classifies_error_statuses(
        #[case] status: StatusCode,
        #[case] rate_limited: bool,
        #[case] expected: &str,
    ) {
        let error = map_github_error("list branches", status, "nope", rate_limited);
        let actual = match error {
            ProviderError::RateLimitExceeded { .. } => "RateLimitExceeded",
            ProviderError::Authentication { .. } => "Authentication",
            ProviderError::Api { .. } => "Api",
            other => panic!("unexpected mapping: {other:?}"),
        };
        assert_eq!(actual, expected);
    }
}
