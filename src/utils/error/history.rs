//! Error code related to the history store.

use thiserror::Error;

/// A type alias for handling history-related errors.
pub type HistoryResult<T> = std::result::Result<T, HistoryError>;

/// The errors that can happen when building or indexing a history store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("core {index} is out of range, there are only {slots} core slots")]
    CoreOutOfRange { index: usize, slots: usize },
    #[error("a history must hold at least {min} points, got {got}")]
    InvalidCapacity { min: usize, got: usize },
    #[error("the smoothing window must be between 1 and {capacity}, got {got}")]
    InvalidWindow { capacity: usize, got: usize },
}
