//! Clean command handler: read the export, clean it, write markdown.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use humansize::{format_size, BINARY};

use clipclean::files::{read_export, write_markdown};
use clipclean::{CleanStats, ClippingCleaner, Config, MarkdownRenderer};

/// Run the cleaner. Paths not given on the command line come from config.
pub fn handle(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let input = input.unwrap_or_else(|| config.output.default_input.clone());
    let output = output.unwrap_or_else(|| config.output.default_output.clone());

    let content = read_export(&input)?;
    let cleaned = ClippingCleaner::new(config.clean_config()).clean(&content);
    let markdown = MarkdownRenderer::new(config.markdown_options()).render(&cleaned.books);

    write_markdown(&output, &markdown, config.output.write_bom)
        .with_context(|| format!("Failed to save cleaned clippings for {}", input.display()))?;

    println!("{}", summary(&cleaned.stats, content.len(), &output));
    Ok(())
}

/// One-line report printed after a successful run.
fn summary(stats: &CleanStats, input_bytes: usize, output: &Path) -> String {
    format!(
        "Cleaned {} book(s): kept {} clipping(s), removed {} duplicate(s) and {} empty ({} read) -> {}",
        stats.books,
        stats.kept,
        stats.duplicates_removed(),
        stats.empty_dropped,
        format_size(input_bytes, BINARY),
        output.display()
    )
}
