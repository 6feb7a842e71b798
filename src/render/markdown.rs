//! Markdown rendering: one `##` section per book, one paragraph per clipping.

use crate::clippings::{Book, Clipping};

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Add an italic line with kind, location and date under each clipping
    pub include_metadata: bool,
}

/// Renders books to markdown, in the order given.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Render all books. Clippings are written in the order they are held.
    pub fn render(&self, books: &[Book]) -> String {
        let mut out = String::new();
        for book in books {
            self.render_book(&mut out, book);
        }
        out
    }

    fn render_book(&self, out: &mut String, book: &Book) {
        out.push_str(&format!("## {}\n\n", book.key));
        for clipping in &book.clippings {
            out.push_str(&clipping.text);
            out.push_str("\n\n");
            if self.options.include_metadata {
                out.push_str(&format!("*{}*\n\n", metadata_line(clipping)));
            }
        }
    }
}

fn metadata_line(clipping: &Clipping) -> String {
    let mut parts = vec![clipping.kind.to_string()];
    if let Some(location) = &clipping.location {
        parts.push(location.clone());
    }
    match (&clipping.timestamp, &clipping.timestamp_raw) {
        (Some(ts), _) => parts.push(ts.format("%Y-%m-%d %H:%M:%S").to_string()),
        (None, Some(raw)) => parts.push(raw.clone()),
        (None, None) => {}
    }
    parts.join(" · ")
}
