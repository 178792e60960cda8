//! Data models representing GitHub repositories, branches and file content.
//!
//! Types prefixed with `Api` are internal deserialisation targets for REST
//! responses. They convert into the provider-side records the adapter maps
//! onto platform types.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use super::error::ProviderError;

#[cfg(feature = "test-support")]
pub mod test_support;

/// GitHub's numeric repository ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoteProjectId(u64);

impl RemoteProjectId {
    /// Wraps a numeric repository ID.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses an identifier value into a repository ID.
    ///
    /// Follows Go's integer literal syntax, which is how Wharf writes these
    /// IDs: an optional `+`, then base-10 digits, a `0x`, `0o` or `0b` radix
    /// prefix, or a leading `0` for octal (`"010"` is 8). Single `_`
    /// separators may appear between digits or after a prefix.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidIdentifier` when the value is not a
    /// positive integer.
    pub fn parse(value: &str) -> Result<Self, ProviderError> {
        let invalid = |message: String| ProviderError::InvalidIdentifier {
            value: value.to_owned(),
            message,
        };

        let unsigned = value.strip_prefix('+').unwrap_or(value);
        let (body, radix, prefixed) = split_radix(unsigned);
        if body.contains('_') && !separators_well_placed(body, prefixed) {
            return Err(invalid("misplaced `_` digit separator".to_owned()));
        }

        let digits: String = body.chars().filter(|&character| character != '_').collect();
        if !digits.chars().all(|character| character.is_ascii_alphanumeric()) {
            return Err(invalid("invalid digit found in string".to_owned()));
        }

        let parsed =
            u64::from_str_radix(&digits, radix).map_err(|error| invalid(error.to_string()))?;
        if parsed == 0 {
            return Err(invalid("repository ID must be positive".to_owned()));
        }
        Ok(Self(parsed))
    }
}

/// Splits a literal into its digits, radix and whether a prefix was present.
fn split_radix(value: &str) -> (&str, u32, bool) {
    const PREFIXES: [(&str, &str, u32); 3] = [("0x", "0X", 16), ("0o", "0O", 8), ("0b", "0B", 2)];

    PREFIXES
        .iter()
        .find_map(|&(lower, upper, radix)| {
            value
                .strip_prefix(lower)
                .or_else(|| value.strip_prefix(upper))
                .map(|digits| (digits, radix, true))
        })
        .unwrap_or_else(|| match value.strip_prefix('0') {
            Some(digits) if !digits.is_empty() => (digits, 8, true),
            _ => (value, 10, false),
        })
}

/// Separators must sit between digits, or directly after a radix prefix.
fn separators_well_placed(body: &str, prefixed: bool) -> bool {
    body.split('_')
        .enumerate()
        .all(|(index, group)| !group.is_empty() || (index == 0 && prefixed))
}

impl fmt::Display for RemoteProjectId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Which of GitHub's clone URLs is reported as a project's git URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneProtocol {
    /// `https://host/owner/name.git`
    #[default]
    Https,
    /// `git@host:owner/name.git`
    Ssh,
}

impl CloneProtocol {
    /// Returns the configuration value for this protocol.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Ssh => "ssh",
        }
    }
}

impl FromStr for CloneProtocol {
    type Err = ProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "https" => Ok(Self::Https),
            "ssh" => Ok(Self::Ssh),
            other => Err(ProviderError::Configuration {
                message: format!("clone protocol must be `https` or `ssh`, got `{other}`"),
            }),
        }
    }
}

/// Owner of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryOwner {
    /// Account login, used in REST paths.
    pub login: Option<String>,
    /// Display name. GitHub usually omits it from repository payloads.
    pub name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Repository record returned by GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Numeric repository ID.
    pub id: RemoteProjectId,
    /// Repository name.
    pub name: String,
    /// `owner/name` path.
    pub full_name: Option<String>,
    /// Repository description.
    pub description: Option<String>,
    /// Owning account.
    pub owner: RepositoryOwner,
    /// Name of the default branch.
    pub default_branch: Option<String>,
    /// HTTPS clone URL.
    pub clone_url: Option<String>,
    /// SSH clone URL.
    pub ssh_url: Option<String>,
}

impl Repository {
    /// Owner name of the repository.
    ///
    /// Uses the owner's display name when GitHub supplies a non-empty one.
    /// Otherwise the name is derived from the first `/`-separated segment of
    /// `full_name`, which is a best-effort guess and empty when `full_name` is
    /// missing.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.owner
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| {
                self.full_name
                    .as_deref()
                    .and_then(|full_name| full_name.split('/').next())
                    .unwrap_or_default()
            })
    }

    /// Owner segment used to address the repository in REST paths.
    ///
    /// Prefers the owner login and falls back to [`Self::owner_name`].
    #[must_use]
    pub fn owner_path_segment(&self) -> &str {
        self.owner
            .login
            .as_deref()
            .filter(|login| !login.is_empty())
            .unwrap_or_else(|| self.owner_name())
    }

    /// Clone URL for the requested protocol.
    #[must_use]
    pub fn git_url(&self, protocol: CloneProtocol) -> Option<&str> {
        match protocol {
            CloneProtocol::Https => self.clone_url.as_deref(),
            CloneProtocol::Ssh => self.ssh_url.as_deref(),
        }
    }
}

/// Encoded file payload returned by the contents endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContent {
    /// Encoding label, `base64` for regular files.
    pub encoding: Option<String>,
    /// Encoded body. GitHub wraps base64 output across lines.
    pub content: Option<String>,
}

impl FileContent {
    /// Decodes the payload into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Decode` when the body is missing, uses an
    /// encoding other than base64, or is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, ProviderError> {
        if let Some(encoding) = self.encoding.as_deref()
            && !encoding.eq_ignore_ascii_case("base64")
        {
            return Err(ProviderError::Decode {
                message: format!("unsupported content encoding `{encoding}`"),
            });
        }

        let body = self.content.as_deref().ok_or_else(|| ProviderError::Decode {
            message: "response carried no file content".to_owned(),
        })?;

        let compact: String = body
            .chars()
            .filter(|character| !character.is_ascii_whitespace())
            .collect();

        STANDARD
            .decode(compact)
            .map_err(|error| ProviderError::Decode {
                message: error.to_string(),
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) full_name: Option<String>,
    pub(super) description: Option<String>,
    pub(super) owner: Option<ApiOwner>,
    pub(super) default_branch: Option<String>,
    pub(super) clone_url: Option<String>,
    pub(super) ssh_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiOwner {
    pub(super) login: Option<String>,
    pub(super) name: Option<String>,
    pub(super) avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiBranch {
    pub(super) name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiContent {
    pub(super) encoding: Option<String>,
    pub(super) content: Option<String>,
}

impl From<ApiOwner> for RepositoryOwner {
    fn from(value: ApiOwner) -> Self {
        Self {
            login: value.login,
            name: value.name,
            avatar_url: value.avatar_url,
        }
    }
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: RemoteProjectId::new(value.id),
            name: value.name,
            full_name: value.full_name,
            description: value.description,
            owner: value.owner.map(RepositoryOwner::from).unwrap_or_default(),
            default_branch: value.default_branch,
            clone_url: value.clone_url,
            ssh_url: value.ssh_url,
        }
    }
}

impl From<ApiContent> for FileContent {
    fn from(value: ApiContent) -> Self {
        Self {
            encoding: value.encoding,
            content: value.content,
        }
    }
}
