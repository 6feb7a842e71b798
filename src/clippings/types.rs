//! Data structures for parsed clippings and the books they belong to.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;

/// Annotation kind, taken from the metadata line of a clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClippingKind {
    /// Highlighted passage (also the fallback for unrecognized metadata)
    #[default]
    Highlight,
    /// Free-form note typed by the reader
    Note,
    /// Position marker, usually without body text
    Bookmark,
}

impl ClippingKind {
    /// Match a kind keyword in English or Chinese.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "highlight" | "标注" => Some(Self::Highlight),
            "note" | "笔记" => Some(Self::Note),
            "bookmark" | "书签" => Some(Self::Bookmark),
            _ => None,
        }
    }

    /// Lowercase label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Highlight => "highlight",
            Self::Note => "note",
            Self::Bookmark => "bookmark",
        }
    }
}

impl fmt::Display for ClippingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How title/author strings are normalized before they are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOptions {
    /// Collapse runs of whitespace to a single space
    pub collapse_whitespace: bool,
    /// Compare titles and authors case-insensitively
    pub case_insensitive: bool,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            case_insensitive: false,
        }
    }
}

impl KeyOptions {
    fn normalize(&self, value: &str) -> String {
        let value = value.trim();
        let collapsed = if self.collapse_whitespace {
            value.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            value.to_string()
        };
        if self.case_insensitive {
            collapsed.to_lowercase()
        } else {
            collapsed
        }
    }
}

/// Identity of a book: the normalized `(title, author)` pair.
///
/// Equality and hashing only look at the normalized pair. The display
/// strings are the ones seen on the clipping that created the key.
#[derive(Debug, Clone)]
pub struct BookKey {
    title: String,
    author: String,
    normalized: (String, String),
}

impl BookKey {
    pub fn new(title: &str, author: &str, options: &KeyOptions) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            normalized: (options.normalize(title), options.normalize(author)),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author as exported, empty when the export omitted it.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Heading text: `Title (Author)`, or just `Title` without an author.
    pub fn heading(&self) -> String {
        if self.author.is_empty() {
            self.title.clone()
        } else {
            format!("{} ({})", self.title, self.author)
        }
    }
}

impl PartialEq for BookKey {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for BookKey {}

impl Hash for BookKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.heading())
    }
}

/// A single highlight, note or bookmark extracted from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipping {
    /// Position of the source block in the export (0-based)
    pub index: usize,
    pub book: BookKey,
    pub kind: ClippingKind,
    /// Page/location descriptor as exported, e.g. `page 12 | Location 170-172`
    pub location: Option<String>,
    /// Parsed timestamp; `None` sorts before every parsed value
    pub timestamp: Option<NaiveDateTime>,
    /// Date string as exported
    pub timestamp_raw: Option<String>,
    /// Body text, trimmed and never empty
    pub text: String,
}

impl Clipping {
    /// Body length in characters, used for the short-text policy.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// All clippings of one book, in export order.
#[derive(Debug, Clone)]
pub struct Book {
    pub key: BookKey,
    pub clippings: Vec<Clipping>,
}

impl Book {
    pub fn new(key: BookKey) -> Self {
        Self {
            key,
            clippings: Vec::new(),
        }
    }
}
