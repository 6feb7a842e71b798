//! Configuration for the cleaning pipeline.

use super::transforms::DEFAULT_SHORT_TEXT_THRESHOLD;
use super::types::KeyOptions;

/// Configuration for the cleaning pipeline.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Bodies shorter than this (in characters) keep only their latest copy
    pub short_text_threshold: usize,
    /// Title/author normalization used to decide "same book"
    pub key_options: KeyOptions,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            short_text_threshold: DEFAULT_SHORT_TEXT_THRESHOLD,
            key_options: KeyOptions::default(),
        }
    }
}
