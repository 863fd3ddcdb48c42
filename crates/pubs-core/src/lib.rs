//! pubs-core: publication list generation for a personal site and CV
//!
//! Reads the publication sheet (CSV export) and produces:
//! - a JSON document of every publication
//! - LaTeX CV fragments, full and selected-only, grouped by type
//! - HTML blocks for the selected publications, with BibTeX citations
//!
//! Every run is a single synchronous pass:
//! [`source`] → [`normalize`] → [`export`] → [`writer`].

pub mod bibtex;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod group;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod text;
pub mod thumbnail;
pub mod writer;

pub use bibtex::{bibtex_entry, cite_key, BibTeXEntry, BibTeXEntryType};
pub use config::PubsConfig;
pub use domain::{Links, PublicationRecord, PublicationType};
pub use error::{PubsError, PubsResult};
pub use export::Rendered;
pub use group::GroupedPublications;
pub use normalize::{normalize_row, normalize_rows, select};
pub use pipeline::{generate_json, generate_latex, generate_selected_html};
pub use source::{read_rows, RawRow};
pub use thumbnail::ThumbnailResolver;
pub use writer::{write_output, WriteSummary};
