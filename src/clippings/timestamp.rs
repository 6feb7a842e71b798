//! Locale-aware parsing of clipping timestamps.
//!
//! Devices write the "Added on" date in the reader's UI language. Parsing
//! tries a fixed list of formats in order and yields `None` when nothing
//! matches; callers treat `None` as the earliest possible time.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// Prefixes that introduce the date on the metadata line.
static RAW_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)Added on\s+(.+)").expect("english timestamp prefix should compile"),
        Regex::new(r"添加于\s*(.+)").expect("chinese timestamp prefix should compile"),
    ]
});

/// `2025年9月18日星期四 上午11:20:48`, weekday and meridiem optional.
static CJK_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})年\s*(\d{1,2})月\s*(\d{1,2})日.*?(上午|下午)?\s*(\d{1,2}):(\d{2}):(\d{2})")
        .expect("cjk date pattern should compile")
});

/// chrono formats for numeric and English dates.
const CHRONO_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    // Thursday, September 18, 2025 11:20:48 AM
    "%A, %B %d, %Y %I:%M:%S %p",
    "%A, %B %d, %Y, %I:%M:%S %p",
    // Thursday, 18 September 2025 11:20:48
    "%A, %d %B %Y %H:%M:%S",
    "%B %d, %Y %I:%M:%S %p",
    "%d %B %Y %H:%M:%S",
];

type Attempt = fn(&str) -> Option<NaiveDateTime>;

const ATTEMPTS: &[Attempt] = &[parse_cjk, parse_chrono];

/// Extract the raw date string from a metadata line.
pub fn extract_raw(meta: &str) -> Option<&str> {
    RAW_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(meta))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|raw| !raw.is_empty())
}

/// Parse a raw date string, trying each known format in turn.
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    ATTEMPTS.iter().find_map(|attempt| attempt(raw))
}

fn parse_cjk(raw: &str) -> Option<NaiveDateTime> {
    let caps = CJK_DATE.captures(raw)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let (month, day) = (num(2)?, num(3)?);
    let (mut hour, minute, second) = (num(5)?, num(6)?, num(7)?);

    match caps.get(4).map(|m| m.as_str()) {
        Some("下午") if hour < 12 => hour += 12,
        Some("上午") if hour == 12 => hour = 0,
        _ => {}
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

fn parse_chrono(raw: &str) -> Option<NaiveDateTime> {
    CHRONO_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
