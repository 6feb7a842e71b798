//! End-to-end tests of the library pipeline on sample exports.

use super::helpers::fixture;
use clipclean::clippings::{CleanConfig, KeyOptions};
use clipclean::render::{MarkdownOptions, MarkdownRenderer};
use clipclean::{CleanStats, ClippingCleaner, ClippingKind};

fn texts(cleaned: &clipclean::CleanedExport, book: usize) -> Vec<&str> {
    cleaned.books[book]
        .clippings
        .iter()
        .map(|c| c.text.as_str())
        .collect()
}

#[test]
fn english_export_is_deduplicated_per_book() {
    let cleaned = ClippingCleaner::default().clean(&fixture("kindle_en.txt"));

    let headings: Vec<String> = cleaned.books.iter().map(|b| b.key.heading()).collect();
    assert_eq!(headings, vec!["Book A (Author A)", "Book B (Author B)"]);
    assert_eq!(texts(&cleaned, 0), vec!["Hello world", "ok"]);
    assert_eq!(texts(&cleaned, 1), vec!["A note about book B"]);

    // The latest "ok" (block 5) wins over block 4
    assert_eq!(cleaned.books[0].clippings[1].index, 5);
    assert_eq!(cleaned.books[1].clippings[0].kind, ClippingKind::Note);

    assert_eq!(
        cleaned.stats,
        CleanStats {
            blocks: 6,
            empty_dropped: 1,
            exact_duplicates: 1,
            superseded_short: 1,
            kept: 3,
            books: 2,
        }
    );
}

#[test]
fn chinese_export_is_deduplicated_per_book() {
    let cleaned = ClippingCleaner::default().clean(&fixture("kindle_zh.txt"));

    // The whitespace-only bookmark never produces a book
    assert_eq!(cleaned.books.len(), 1);
    assert_eq!(cleaned.books[0].key.title(), "三体");
    assert_eq!(cleaned.books[0].key.author(), "刘慈欣");
    assert_eq!(
        texts(&cleaned, 0),
        vec!["宇宙很大，生活更大，也许以后还有缘相见。", "好"]
    );

    // 下午2:05 beats 上午9:05 even though it comes first
    assert_eq!(cleaned.books[0].clippings[1].index, 2);
    assert_eq!(
        cleaned.books[0].clippings[0].location.as_deref(),
        Some("位置 #170-172")
    );
}

#[test]
fn renders_expected_markdown() {
    let cleaned = ClippingCleaner::default().clean(&fixture("kindle_en.txt"));
    let rendered = MarkdownRenderer::default().render(&cleaned.books);

    insta::assert_snapshot!(rendered.trim_end(), @r"
## Book A (Author A)

Hello world

ok

## Book B (Author B)

A note about book B
");
}

#[test]
fn identical_blocks_keep_one_line() {
    let block = "Book A (Author A)\n- Your Highlight on Location 1 | Added on {ts}\n\nHello world\n==========\n";
    let export = format!(
        "{}{}",
        block.replace("{ts}", "Thursday, September 18, 2025 11:20:48 AM"),
        block.replace("{ts}", "Friday, September 19, 2025 11:20:48 AM"),
    );

    let cleaned = ClippingCleaner::default().clean(&export);
    let rendered = MarkdownRenderer::default().render(&cleaned.books);

    assert_eq!(rendered, "## Book A (Author A)\n\nHello world\n\n");
}

#[test]
fn whitespace_body_produces_no_output() {
    let export = "Book A (Author A)\n- Your Highlight on Location 1 | Added on 2025-01-01 10:00:00\n\n \t \n==========\n";

    let cleaned = ClippingCleaner::default().clean(export);

    assert!(cleaned.books.is_empty());
    assert!(MarkdownRenderer::default().render(&cleaned.books).is_empty());
}

#[test]
fn case_folding_merges_books_when_enabled() {
    let export = "\
Dune (Frank Herbert)
- Your Highlight on Location 1 | Added on 2025-01-01 10:00:00

Fear is the mind-killer.
==========
DUNE (frank herbert)
- Your Highlight on Location 2 | Added on 2025-01-01 10:01:00

I must not fear.
==========
";

    let strict = ClippingCleaner::default().clean(export);
    assert_eq!(strict.books.len(), 2);

    let folded = ClippingCleaner::new(CleanConfig {
        key_options: KeyOptions {
            case_insensitive: true,
            ..KeyOptions::default()
        },
        ..CleanConfig::default()
    })
    .clean(export);
    assert_eq!(folded.books.len(), 1);
    assert_eq!(folded.books[0].key.heading(), "Dune (Frank Herbert)");
    assert_eq!(folded.books[0].clippings.len(), 2);
}

#[test]
fn higher_threshold_applies_recency_to_longer_text() {
    let export = "\
Book (Author)
- Your Highlight on Location 1 | Added on 2025-01-02 10:00:00

Hello world
==========
Book (Author)
- Your Highlight on Location 1 | Added on 2025-01-03 10:00:00

Hello world
==========
";
    let cleaned = ClippingCleaner::new(CleanConfig {
        short_text_threshold: 20,
        ..CleanConfig::default()
    })
    .clean(export);

    assert_eq!(cleaned.books[0].clippings.len(), 1);
    assert_eq!(cleaned.books[0].clippings[0].index, 1);
}

#[test]
fn metadata_rendering_uses_parsed_timestamps() {
    let cleaned = ClippingCleaner::default().clean(&fixture("kindle_zh.txt"));
    let rendered = MarkdownRenderer::new(MarkdownOptions {
        include_metadata: true,
    })
    .render(&cleaned.books);

    assert!(rendered.contains("*highlight · 位置 #170-172 · 2025-09-18 11:20:48*"));
    assert!(rendered.contains("*note · 位置 #200 · 2025-09-18 14:05:00*"));
}
