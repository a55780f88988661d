//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The frame count or reference sequence cannot be replayed.
    ///
    /// Raised for a zero frame count and for an empty sequence (the hit
    /// ratio would be undefined).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The policy selector does not name a known replacement policy.
    #[error("Unsupported policy: {0:?}")]
    UnsupportedPolicy(String),

    /// The frame table is full and the policy produced no victim.
    ///
    /// This indicates a bug - every policy must pick a victim from a full
    /// table.
    #[error("Policy {0} found no frame to evict")]
    NoEvictableFrame(&'static str),
}

impl Error {
    /// Shorthand for [`Error::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration(reason.into())
    }
}
