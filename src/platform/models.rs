//! Provider-neutral records consumed by the platform.

use serde::{Deserialize, Serialize};

/// Platform-level project record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WharfProject {
    /// Project (repository) name.
    pub name: String,
    /// Group the project lives under; the repository owner's login on GitHub.
    pub group_name: String,
    /// Free-form project description.
    pub description: Option<String>,
    /// Avatar of the owning group.
    pub avatar_url: Option<String>,
    /// URL the platform clones from.
    pub git_url: Option<String>,
    /// Provider's opaque project ID.
    pub remote_project_id: String,
}

/// Branch of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WharfBranch {
    /// Branch name.
    pub name: String,
    /// Whether this is the repository's default branch.
    pub default: bool,
}
