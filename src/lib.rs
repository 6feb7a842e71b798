//! clipclean - clean up e-reader clipping exports.
//!
//! Reads a "My Clippings.txt" export, groups highlights, notes and bookmarks
//! by book, removes duplicates and renders one markdown section per book.

pub mod cli;
pub mod clippings;
pub mod config;
pub mod files;
pub mod render;

pub use clippings::{Book, CleanStats, CleanedExport, Clipping, ClippingCleaner, ClippingKind};
pub use config::Config;
pub use render::MarkdownRenderer;
