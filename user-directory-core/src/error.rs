//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use user_directory_provider::ProviderError;

/// Core layer error type
///
/// Exactly the two outcomes a view load can end in besides success.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The remote source could not deliver the requested data
    #[error("Fetch failed: {0}")]
    FetchFailed(ProviderError),

    /// The detail endpoint reported the user as absent
    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl CoreError {
    /// Whether it is expected behavior (resource does not exist), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UserNotFound(_) => true,
            Self::FetchFailed(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
