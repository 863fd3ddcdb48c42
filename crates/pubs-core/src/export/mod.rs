//! Export renderers for the three output formats
//!
//! - `json` - the full publication list for the site's JavaScript
//! - `latex` - CV fragments grouped by publication type
//! - `html` - selected publications with thumbnails and citations

pub mod html;
pub mod json;
pub mod latex;

pub use html::{render_publication, HtmlOptions, RenderedPublication};
pub use json::{render_document, JsonPublication};
pub use latex::LatexOptions;

/// Rendered output plus the number of records it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub count: usize,
}
