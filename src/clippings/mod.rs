//! Parsing and deduplication of e-reader clipping exports.
//!
//! An export ("My Clippings.txt") is a flat list of highlights, notes and
//! bookmarks separated by `==========` lines. The pipeline runs in four
//! stages, each a plain function over the output of the previous one:
//!
//! 1. [`splitter`] - raw text to raw blocks
//! 2. [`classifier`] - raw block to [`Clipping`] (blocks without body text
//!    are dropped here)
//! 3. [`grouper`] - clippings to [`Book`]s in first-seen order
//! 4. [`transforms`] - per-book duplicate removal
//!
//! [`ClippingCleaner`] wires the stages together and collects
//! [`CleanStats`]. None of the stages perform I/O or fail: malformed input
//! degrades to defaults (empty author, highlight kind, unknown timestamp).

mod config;
mod pipeline;
mod types;

pub mod classifier;
pub mod grouper;
pub mod splitter;
pub mod timestamp;
pub mod transforms;

pub use config::CleanConfig;
pub use pipeline::{CleanStats, CleanedExport, ClippingCleaner};
pub use transforms::{deduplicate, DeduplicateClippings, Transform, DEFAULT_SHORT_TEXT_THRESHOLD};
pub use types::{Book, BookKey, Clipping, ClippingKind, KeyOptions};
