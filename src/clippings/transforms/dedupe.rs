//! Duplicate clipping removal.
//!
//! Re-highlighting a passage, or syncing the same book on two devices, leaves
//! several identical clippings in the export. Devices also regenerate short
//! highlights and bookmarks around the same location at different times.
//! This transform keeps one clipping per distinct text.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use super::Transform;
use crate::clippings::types::Clipping;

/// Bodies shorter than this many characters use the recency policy.
pub const DEFAULT_SHORT_TEXT_THRESHOLD: usize = 8;

/// Removes duplicate clippings within one book.
///
/// **Policy**:
/// 1. Normal clippings (at least `short_text_threshold` characters): the
///    first clipping with a given text is kept, later copies are dropped
/// 2. Short clippings: among clippings with the same text, the one with the
///    latest timestamp is kept; on a tie the later one in export order wins,
///    and a missing timestamp loses to any parsed one
/// 3. Kept clippings stay in their original relative order
pub struct DeduplicateClippings {
    short_text_threshold: usize,
    exact_duplicates: usize,
    superseded_short: usize,
}

impl DeduplicateClippings {
    /// Create a deduplicator with the given short-text threshold.
    pub fn new(short_text_threshold: usize) -> Self {
        Self {
            short_text_threshold,
            exact_duplicates: 0,
            superseded_short: 0,
        }
    }

    /// Normal-length clippings dropped as exact copies.
    pub fn exact_duplicates(&self) -> usize {
        self.exact_duplicates
    }

    /// Short clippings dropped in favour of a more recent copy.
    pub fn superseded_short(&self) -> usize {
        self.superseded_short
    }

    /// Decide which clippings survive, one flag per clipping.
    fn keep_flags(&mut self, clippings: &[Clipping]) -> Vec<bool> {
        let mut keep = vec![false; clippings.len()];
        let mut seen: HashSet<&str> = HashSet::new();
        // text -> index of the most recent short clipping so far
        let mut latest_short: HashMap<&str, usize> = HashMap::new();

        for (i, clipping) in clippings.iter().enumerate() {
            let text = clipping.text.as_str();

            if clipping.text_len() < self.short_text_threshold {
                match latest_short.entry(text) {
                    Entry::Occupied(mut entry) => {
                        self.superseded_short += 1;
                        if clipping.timestamp >= clippings[*entry.get()].timestamp {
                            entry.insert(i);
                        }
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(i);
                    }
                }
            } else if seen.insert(text) {
                keep[i] = true;
            } else {
                self.exact_duplicates += 1;
            }
        }

        for &i in latest_short.values() {
            keep[i] = true;
        }
        keep
    }
}

impl Default for DeduplicateClippings {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_TEXT_THRESHOLD)
    }
}

impl Transform for DeduplicateClippings {
    fn transform(&mut self, clippings: &mut Vec<Clipping>) {
        let mut flags = self.keep_flags(clippings).into_iter();
        clippings.retain(|_| flags.next().unwrap_or(false));
    }
}

/// Deduplicate one book's clippings with the given short-text threshold.
pub fn deduplicate(mut clippings: Vec<Clipping>, short_text_threshold: usize) -> Vec<Clipping> {
    DeduplicateClippings::new(short_text_threshold).transform(&mut clippings);
    clippings
}
