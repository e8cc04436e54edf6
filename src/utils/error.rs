//! Error types, split up by the part of the program that raises them.
//!
//! User-facing option errors live in [`crate::options::OptionError`] instead.

mod collection;
mod draw;
mod history;

pub use collection::{CollectionError, CollectionResult};
pub use draw::{DrawError, DrawResult};
pub use history::{HistoryError, HistoryResult};
