//! Filesystem-safe slugs derived from free text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Slug used when the text has no ASCII letters or digits at all
pub const FALLBACK_SLUG: &str = "publication";

/// Convert text to a lowercase slug of `[a-z0-9]` words joined by single underscores.
///
/// Lowercasing happens before filtering, so characters that lowercase to ASCII
/// (e.g. the Kelvin sign) are kept. Returns [`FALLBACK_SLUG`] when nothing survives.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let slug = NON_SLUG_RUN.replace_all(&lowered, "_");
    let slug = slug.trim_matches('_');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
