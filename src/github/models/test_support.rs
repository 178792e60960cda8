//! JSON payload builders mirroring GitHub REST responses.
//!
//! Used by gateway tests and the behavioural tests to seed mock servers with
//! realistic bodies.
//!
//! # Examples
//!
//! ```
//! use wharf_provider_github::github::models::test_support::repository_json;
//!
//! let body = repository_json(42, "iver-wharf", "wharf-api");
//! assert_eq!(body["full_name"], "iver-wharf/wharf-api");
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

/// Line width GitHub uses when wrapping base64 file content.
const BASE64_LINE_WIDTH: usize = 60;

/// Builds a repository payload as returned by `GET /repos/{owner}/{repo}`.
///
/// The owner carries a login but no display name, like real repository
/// payloads. The default branch is `main`.
#[must_use]
pub fn repository_json(id: u64, owner: &str, name: &str) -> Value {
    json!({
        "id": id,
        "node_id": format!("R_{id}"),
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "private": false,
        "description": format!("{name} repository"),
        "owner": {
            "login": owner,
            "id": 1,
            "avatar_url": format!("https://avatars.example.com/{owner}.png"),
            "type": "Organization"
        },
        "default_branch": "main",
        "clone_url": format!("https://github.com/{owner}/{name}.git"),
        "ssh_url": format!("git@github.com:{owner}/{name}.git"),
        "git_url": format!("git://github.com/{owner}/{name}.git")
    })
}

/// Builds a branch listing entry.
#[must_use]
pub fn branch_json(name: &str) -> Value {
    json!({
        "name": name,
        "commit": { "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
        "protected": false
    })
}

/// Builds a contents payload for `raw`, base64 encoded and line wrapped.
#[must_use]
pub fn file_content_json(path: &str, raw: &[u8]) -> Value {
    let encoded = STANDARD.encode(raw);
    let wrapped: Vec<String> = encoded
        .as_bytes()
        .chunks(BASE64_LINE_WIDTH)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect();

    json!({
        "type": "file",
        "encoding": "base64",
        "size": raw.len(),
        "name": path.rsplit('/').next().unwrap_or(path),
        "path": path,
        "content": format!("{}\n", wrapped.join("\n"))
    })
}

/// Builds the error body GitHub sends with a 404 response.
#[must_use]
pub fn not_found_json() -> Value {
    json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    })
}
