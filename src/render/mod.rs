//! Content rendering.
//!
//! The filename extension decides how a document is displayed: markdown
//! extensions are converted to HTML, everything else is passed through
//! verbatim as plain text. Selection is a pure function of the name; the
//! content bytes are never inspected.

use pulldown_cmark::{html, Options, Parser};

// =============================================================================
// Document Kind
// =============================================================================

/// How a document should be displayed, derived from its filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Converted to HTML before display
    Markdown,

    /// Served byte-for-byte as `text/plain`
    PlainText,
}

impl DocumentKind {
    /// Determine the kind from a document name.
    ///
    /// `.md` and `.markdown` suffixes (case-insensitive) select markdown;
    /// anything else is plain text.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".md") || lower.ends_with(".markdown") {
            DocumentKind::Markdown
        } else {
            DocumentKind::PlainText
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// A document rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// HTML markup produced from markdown source
    Html(String),

    /// Verbatim text content
    Text(String),
}

/// Render document content for display based on its name.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; documents at
/// this scale are hand-written text and a lossy view beats an error page.
pub fn render(name: &str, content: &[u8]) -> Rendered {
    let text = String::from_utf8_lossy(content);
    match DocumentKind::from_name(name) {
        DocumentKind::Markdown => Rendered::Html(markdown_to_html(&text)),
        DocumentKind::PlainText => Rendered::Text(text.into_owned()),
    }
}

/// Convert markdown source to HTML in one pass.
fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

// =============================================================================
// Tests
// =============================================================================
