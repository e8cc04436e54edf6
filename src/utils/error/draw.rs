//! Error code related to drawing.

use thiserror::Error;

/// A type alias for handling drawing-related errors.
pub type DrawResult<T> = std::result::Result<T, DrawError>;

/// The errors that can happen with drawing.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The terminal could not be written to.
    #[error("failed to draw to the terminal: {0}")]
    InvalidIo(#[from] std::io::Error),
}
