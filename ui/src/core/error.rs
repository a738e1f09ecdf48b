//! Configuration failures surfaced while resolving widget attributes.

use thiserror::Error;

/// A malformed or missing link list.
///
/// `Clone` so a component can keep the resolution outcome in a hook and
/// re-raise it on every render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Raised by the strict policy for an absent, empty or falsy list.
    #[error("the `links` attribute is required and must be a non-empty JSON array of {{name, href}} objects")]
    MissingLinks,

    #[error("the `links` attribute is not valid JSON: {reason}")]
    Malformed { reason: String },

    #[error("the `links` attribute must be a JSON array, found {found}")]
    NotAList { found: &'static str },
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed {
            reason: err.to_string(),
        }
    }
}
