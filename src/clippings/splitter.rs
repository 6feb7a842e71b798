//! Splits a raw export into clipping blocks.

/// Line that separates two clippings in the export.
pub const SEPARATOR: &str = "==========";

const BOM: char = '\u{feff}';

/// Split the export into raw blocks.
///
/// Blocks are trimmed and empty blocks (before the first separator, after
/// the last one, or between two adjacent separators) are skipped.
pub fn split_blocks(content: &str) -> impl Iterator<Item = &str> {
    content
        .trim_start_matches(BOM)
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
}
