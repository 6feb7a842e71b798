//! File handling for clipping exports.

pub mod error;
pub mod export;

pub use error::FilesError;
pub use export::{read_export, write_markdown};
