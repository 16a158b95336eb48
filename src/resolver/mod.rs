//! The article resolution pipeline.
//!
//! ```text
//! UnreadSetResolver → PositionNavigator → ContentResolver
//! ```
//!
//! Each stage is re-run from upstream state on every request; nothing is
//! kept between calls.

pub mod content;
pub mod navigator;
pub mod unread;

#[cfg(test)]
pub(crate) mod testing;

pub use content::{ContentResolver, ContentSource, GenericSource, PreExtractedSource};
pub use navigator::{PositionNavigator, Selection};
pub use unread::{UnreadSetResolver, FILTER_BATCH_SIZE, FILTER_MAX_BATCHES};
