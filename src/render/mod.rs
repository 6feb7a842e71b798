//! Output rendering for cleaned exports.

mod markdown;

pub use markdown::{MarkdownOptions, MarkdownRenderer};
