//! Pipeline orchestration: split, classify, group, deduplicate.

use rayon::prelude::*;
use tracing::{debug, info};

use super::classifier::classify;
use super::config::CleanConfig;
use super::grouper::group_by_book;
use super::splitter::split_blocks;
use super::transforms::{DeduplicateClippings, Transform};
use super::types::{Book, Clipping};

/// Counters collected while cleaning an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Non-empty blocks found in the export
    pub blocks: usize,
    /// Blocks dropped because their body was empty
    pub empty_dropped: usize,
    /// Normal-length clippings dropped as exact copies
    pub exact_duplicates: usize,
    /// Short clippings dropped in favour of a more recent copy
    pub superseded_short: usize,
    /// Clippings left after deduplication
    pub kept: usize,
    /// Distinct books
    pub books: usize,
}

impl CleanStats {
    /// Total clippings removed by deduplication.
    pub fn duplicates_removed(&self) -> usize {
        self.exact_duplicates + self.superseded_short
    }
}

/// Books with their kept clippings, in first-seen order.
#[derive(Debug, Clone)]
pub struct CleanedExport {
    pub books: Vec<Book>,
    pub stats: CleanStats,
}

/// Runs the whole cleaning pipeline over an export's contents.
#[derive(Debug, Clone, Default)]
pub struct ClippingCleaner {
    config: CleanConfig,
}

impl ClippingCleaner {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    /// Parse every block of the export into clippings, in export order.
    pub fn parse(&self, content: &str) -> (Vec<Clipping>, CleanStats) {
        let mut stats = CleanStats::default();
        let clippings: Vec<Clipping> = split_blocks(content)
            .enumerate()
            .filter_map(|(index, block)| {
                stats.blocks += 1;
                let clipping = classify(block, index, &self.config.key_options);
                if clipping.is_none() {
                    stats.empty_dropped += 1;
                }
                clipping
            })
            .collect();
        (clippings, stats)
    }

    /// Clean an export: one entry per book, duplicates removed.
    pub fn clean(&self, content: &str) -> CleanedExport {
        let (clippings, mut stats) = self.parse(content);
        debug!(
            blocks = stats.blocks,
            clippings = clippings.len(),
            "parsed export"
        );

        let books = group_by_book(clippings);
        let threshold = self.config.short_text_threshold;

        // Books are independent; an indexed collect keeps first-seen order
        let deduped: Vec<(Book, usize, usize)> = books
            .into_par_iter()
            .map(|mut book| {
                let mut deduper = DeduplicateClippings::new(threshold);
                deduper.transform(&mut book.clippings);
                debug!(book = %book.key, kept = book.clippings.len(), "deduplicated book");
                (book, deduper.exact_duplicates(), deduper.superseded_short())
            })
            .collect();

        let mut books = Vec::with_capacity(deduped.len());
        for (book, exact, short) in deduped {
            stats.exact_duplicates += exact;
            stats.superseded_short += short;
            stats.kept += book.clippings.len();
            books.push(book);
        }
        stats.books = books.len();

        info!(
            books = stats.books,
            kept = stats.kept,
            removed = stats.duplicates_removed(),
            "cleaned export"
        );

        CleanedExport { books, stats }
    }
}
