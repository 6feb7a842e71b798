//! Per-book transforms applied after grouping.

mod dedupe;

pub use dedupe::{deduplicate, DeduplicateClippings, DEFAULT_SHORT_TEXT_THRESHOLD};

use super::types::Clipping;

/// An in-place pass over one book's clippings.
pub trait Transform {
    fn transform(&mut self, clippings: &mut Vec<Clipping>);
}
