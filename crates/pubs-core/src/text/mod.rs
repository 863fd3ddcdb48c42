//! Text processing module
//!
//! - Slug generation for thumbnails and cite keys
//! - Author list parsing
//! - LaTeX and HTML escaping

mod authors;
mod escape;
mod slug;

pub use authors::{clean_author_field, parse_authors, split_authors, ParsedAuthors};
pub use escape::{escape_html, escape_latex, unescape_latex};
pub use slug::{slugify, FALLBACK_SLUG};
