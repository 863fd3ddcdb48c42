//! Author list parsing
//!
//! The author column comes in two shapes:
//! - `Tran, Minh; Lee, Sam` - semicolon-delimited, each author `Last, First`
//! - `Minh Tran, Sam Lee` - comma-delimited full names
//!
//! The shape is inferred per record from the presence of a semicolon.

/// Marker for co-first authors, kept for display and dropped in citations
const CO_FIRST_MARKER: char = '*';

/// Author names in both output forms, index-aligned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAuthors {
    /// Names as shown on the page, `First Last`, markers retained
    pub display: Vec<String>,
    /// Names for BibTeX, markers removed
    pub bibliography: Vec<String>,
}

impl ParsedAuthors {
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }
}

/// Strip surrounding whitespace and double quotes from a raw author field.
pub fn clean_author_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '"' || c.is_whitespace())
}

/// Which separator the author field uses
fn delimiter(raw: &str) -> char {
    if raw.contains(';') {
        ';'
    } else {
        ','
    }
}

/// Split a raw author field into trimmed, non-empty tokens.
///
/// Splits on `;` when the field contains one, otherwise on `,`.
/// Tokens are returned as written (no reordering).
pub fn split_authors(raw: &str) -> Vec<String> {
    let cleaned = clean_author_field(raw);
    cleaned
        .split(delimiter(cleaned))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a raw author field into display and bibliography names.
///
/// In the semicolon form a token with a comma is read as `Last, First` and
/// reordered to `First Last`. Comma-form tokens are already full names.
pub fn parse_authors(raw: &str) -> ParsedAuthors {
    let cleaned = clean_author_field(raw);
    let reorder = delimiter(cleaned) == ';';

    let mut parsed = ParsedAuthors::default();
    for token in split_authors(cleaned) {
        let name = if reorder {
            reorder_last_first(&token)
        } else {
            token
        };
        if name.is_empty() {
            continue;
        }
        parsed.bibliography.push(name.replace(CO_FIRST_MARKER, ""));
        parsed.display.push(name);
    }
    parsed
}

/// `Last, First` to `First Last`; tokens without a comma pass through.
fn reorder_last_first(token: &str) -> String {
    match token.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim())
            .trim()
            .to_string(),
        None => token.to_string(),
    }
}
