//! Opaque project identifiers.

use serde::{Deserialize, Serialize};

/// Provider-specific key used to re-address a previously discovered project.
///
/// The platform treats the values as opaque. Each provider decides how many
/// values it needs and what they mean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectIdentifier {
    /// Ordered identifier values.
    pub values: Vec<String>,
}

impl ProjectIdentifier {
    /// Creates an identifier from its ordered values.
    #[must_use]
    pub const fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Creates an identifier holding exactly one value.
    #[must_use]
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}
