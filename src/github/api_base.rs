//! Derivation of the GitHub REST API base URL from a remote provider URL.
//!
//! Platforms configure providers with whatever URL users paste: the public
//! `https://github.com`, the API host itself, or a GitHub Enterprise Server
//! host with or without the `/api/v3` suffix. All of them map onto the URL
//! Octocrab needs as its base URI.

use url::Url;

use super::error::ProviderError;

const PUBLIC_API_BASE: &str = "https://api.github.com/";
const ENTERPRISE_API_PATH: &str = "api/v3";

/// Derives the REST API base URL for a configured remote provider URL.
///
/// # Errors
///
/// Returns `ProviderError::Connection` when the URL cannot be parsed or has
/// no host.
pub fn derive_api_base(remote_provider_url: &str) -> Result<Url, ProviderError> {
    let connection_error = |message: String| ProviderError::Connection {
        base_url: remote_provider_url.to_owned(),
        message,
    };

    let parsed = Url::parse(remote_provider_url.trim())
        .map_err(|error| connection_error(error.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| connection_error("URL must include a host".to_owned()))?;

    if host.eq_ignore_ascii_case("github.com") || host.eq_ignore_ascii_case("api.github.com") {
        return Url::parse(PUBLIC_API_BASE).map_err(|error| connection_error(error.to_string()));
    }

    let path = parsed.path().trim_end_matches('/').to_owned();
    let mut api_url = parsed;
    api_url.set_query(None);
    api_url.set_fragment(None);

    if path.ends_with(ENTERPRISE_API_PATH) {
        api_url.set_path(&path);
    } else {
        api_url.set_path(&format!("{path}/{ENTERPRISE_API_PATH}"));
    }
    Ok(api_url)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::derive_api_base;
    use crate::github::error::ProviderError;

    #[rstest]
    #[case::public_web_host("https://github.com", "https://api.github.com/")]
    #[case::public_web_host_trailing_slash("https://github.com/", "https://api.github.com/")]
    #[case::public_api_host("https://api.github.com", "https://api.github.com/")]
    #[case::enterprise_host("https://ghe.example.com", "https://ghe.example.com/api/v3")]
    #[case::enterprise_with_suffix(
        "https://ghe.example.com/api/v3/",
        "https://ghe.example.com/api/v3"
    )]
    #[case::enterprise_with_port("http://127.0.0.1:8080", "http://127.0.0.1:8080/api/v3")]
    #[case::enterprise_under_prefix(
        "https://example.com/github",
        "https://example.com/github/api/v3"
    )]
    fn derives_api_base(#[case] input: &str, #[case] expected: &str) {
        let api_base = derive_api_base(input).expect("URL should derive");
        assert_eq!(api_base.as_str(), expected, "api base mismatch for {input}");
    }

    #[rstest]
    #[case::not_a_url("not a url")]
    #[case::no_host("file:///tmp/repo")]
    fn rejects_unusable_urls(#[case] input: &str) {
        let result = derive_api_base(input);
        assert!(
            matches!(
                &result,
                Err(ProviderError::Connection { base_url, .. }) if base_url == input
            ),
            "expected Connection error, got {result:?}"
        );
    }
}
