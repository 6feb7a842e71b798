//! Turns a raw block into a structured [`Clipping`].
//!
//! A block is laid out as:
//!
//! ```text
//! Title (Author)
//! - Your Highlight on page 12 | Location 170-172 | Added on Thursday, ...
//!
//! body line(s)
//! ```
//!
//! Exports differ per device and UI language, so every field falls back to a
//! default instead of failing: no author becomes an empty author, an unknown
//! kind becomes a highlight, and an unreadable date becomes `None`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::timestamp;
use super::types::{BookKey, Clipping, ClippingKind, KeyOptions};

const BOM: char = '\u{feff}';

/// Trailing `(Author)` with Latin or full-width parentheses.
static TITLE_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*[(（]([^()（）]*)[)）]\s*$").expect("title pattern should compile")
});

/// Kind phrases. English puts the location after the keyword, Chinese
/// puts it between 您在 and 的.
static KIND_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)Your\s+(Highlight|Note|Bookmark)\b\s*(.*)")
            .expect("english kind pattern should compile"),
        Regex::new(r"您在(.*?)的(标注|笔记|书签)").expect("chinese kind pattern should compile"),
    ]
});

/// Bare keywords, for metadata lines that lost their usual phrasing.
static KIND_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(highlight|note|bookmark)\b|(标注|笔记|书签)")
        .expect("kind keyword pattern should compile")
});

/// Parse one raw block. Returns `None` for blocks without body text.
pub fn classify(block: &str, index: usize, options: &KeyOptions) -> Option<Clipping> {
    let mut lines = block.lines();
    let title_line = lines.next()?;
    let Some(meta) = lines.next().map(str::trim) else {
        trace!(index, "block has no metadata line");
        return None;
    };

    let body_lines: Vec<&str> = lines.skip_while(|line| line.trim().is_empty()).collect();
    let text = body_lines.join("\n").trim().to_string();
    if text.is_empty() {
        trace!(index, meta, "dropping clipping with empty body");
        return None;
    }

    let (title, author) = parse_title_author(title_line);
    let (kind, location) = parse_kind_and_location(meta);
    let timestamp_raw = timestamp::extract_raw(meta).map(str::to_string);
    let timestamp = timestamp_raw.as_deref().and_then(timestamp::parse);
    if timestamp.is_none() {
        debug!(index, raw = ?timestamp_raw, "timestamp not recognized, treating as earliest");
    }

    Some(Clipping {
        index,
        book: BookKey::new(&title, &author, options),
        kind,
        location,
        timestamp,
        timestamp_raw,
        text,
    })
}

/// Split a `Title (Author)` line; a line without a trailing parenthetical
/// is all title.
pub fn parse_title_author(line: &str) -> (String, String) {
    let line = line.trim_start_matches(BOM).trim();
    match TITLE_AUTHOR.captures(line) {
        Some(caps) if !caps[1].trim().is_empty() => {
            (caps[1].trim().to_string(), caps[2].trim().to_string())
        }
        _ => (line.to_string(), String::new()),
    }
}

/// Detect the clipping kind and the location descriptor on a metadata line.
pub fn parse_kind_and_location(meta: &str) -> (ClippingKind, Option<String>) {
    let meta = meta.trim().trim_start_matches('-').trim();
    let mut segments = meta.split('|').map(str::trim);
    let head = segments.next().unwrap_or_default();

    // Middle segments hold "Location 170-172" when the page is in the head
    let mut parts: Vec<String> = Vec::new();
    let mut kind = None;

    if let Some(caps) = KIND_PHRASES[0].captures(head) {
        kind = ClippingKind::from_keyword(&caps[1]);
        let rest = strip_preposition(&caps[2]);
        if !rest.is_empty() {
            parts.push(rest.to_string());
        }
    } else if let Some(caps) = KIND_PHRASES[1].captures(head) {
        kind = ClippingKind::from_keyword(&caps[2]);
        let rest = caps[1].trim();
        if !rest.is_empty() {
            parts.push(rest.to_string());
        }
    } else if let Some(caps) = KIND_KEYWORD.captures(head) {
        // Older firmware: "Highlight Loc. 1234-35"
        if let Some(keyword) = caps.get(1).or_else(|| caps.get(2)) {
            kind = ClippingKind::from_keyword(keyword.as_str());
            let rest = format!("{} {}", &head[..keyword.start()], &head[keyword.end()..]);
            let rest = strip_preposition(&rest);
            if !rest.is_empty() {
                parts.push(rest.to_string());
            }
        }
    }

    parts.extend(
        segments
            .filter(|segment| !segment.is_empty() && timestamp::extract_raw(segment).is_none())
            .map(str::to_string),
    );

    let kind = kind.or_else(|| keyword_kind(meta)).unwrap_or_else(|| {
        debug!(meta, "no clipping kind found, defaulting to highlight");
        ClippingKind::Highlight
    });

    let location = if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    };

    (kind, location)
}

/// Drop the "on"/"at" joining the kind to the location.
fn strip_preposition(rest: &str) -> &str {
    let rest = rest.trim();
    rest.strip_prefix("on ")
        .or_else(|| rest.strip_prefix("at "))
        .unwrap_or(rest)
        .trim()
}

fn keyword_kind(meta: &str) -> Option<ClippingKind> {
    let caps = KIND_KEYWORD.captures(meta)?;
    let keyword = caps.get(1).or_else(|| caps.get(2))?;
    ClippingKind::from_keyword(keyword.as_str())
}
