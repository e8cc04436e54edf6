//! Error code related to sampling CPU counters.

use std::borrow::Cow;

use thiserror::Error;

/// A type alias for handling collection-related errors.
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// The errors that can happen while setting up or reading CPU counters.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The OS has no counter facility we know how to read.
    #[error("CPU usage counters are not supported on this platform")]
    Unsupported,
    /// The counter facility exists but could not provide what we asked for.
    #[error("source: {0}, reason: {1}")]
    Other(Cow<'static, str>, Cow<'static, str>),
}

impl CollectionError {
    /// A generic error.
    pub fn other<C: Into<Cow<'static, str>>, D: Into<Cow<'static, str>>>(
        source: C, reason: D,
    ) -> Self {
        Self::Other(source.into(), reason.into())
    }
}
