//! BibTeX citations for publication records
//!
//! Only the two entry types the publication sheet distinguishes are produced.
//! Values are wrapped in double braces so BibTeX keeps their capitalization.

use crate::domain::PublicationRecord;
use crate::text::slugify;

/// Cite key prefix used when a record has no authors
const ANONYMOUS_KEY_PREFIX: &str = "pub";

/// BibTeX entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BibTeXEntryType {
    Article,
    InProceedings,
}

impl BibTeXEntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::InProceedings => "inproceedings",
        }
    }
}

/// A single BibTeX field (key-value pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibTeXField {
    pub key: String,
    pub value: String,
}

/// A generated BibTeX entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibTeXEntry {
    pub cite_key: String,
    pub entry_type: BibTeXEntryType,
    pub fields: Vec<BibTeXField>,
}

impl BibTeXEntry {
    pub fn new(cite_key: String, entry_type: BibTeXEntryType) -> Self {
        Self {
            cite_key,
            entry_type,
            fields: Vec::new(),
        }
    }

    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push(BibTeXField {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Add a field only when its value is non-empty
    pub fn add_optional_field(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.add_field(key, value);
        }
    }

    pub fn get_field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }
}

/// Generate the cite key of a record.
///
/// First author slug (or `pub`), then the year, then the first word of the
/// title slug: `tran2024fast`. Keys are stable but not guaranteed unique.
pub fn cite_key(record: &PublicationRecord) -> String {
    let author = record
        .authors
        .bibliography
        .first()
        .map(|name| slugify(name))
        .unwrap_or_else(|| ANONYMOUS_KEY_PREFIX.to_string());

    let title_slug = slugify(&record.title);
    let title_word = title_slug.split('_').next().unwrap_or_default();

    format!("{}{}{}", author, record.year, title_word)
}

/// Build the BibTeX entry of a record.
pub fn bibtex_entry(record: &PublicationRecord) -> BibTeXEntry {
    let authors = record.authors.bibliography.join(" and ");

    if record.is_journal_like() {
        let mut entry = BibTeXEntry::new(cite_key(record), BibTeXEntryType::Article);
        entry.add_field("title", record.title.as_str());
        entry.add_field("author", authors);
        entry.add_field("journal", record.publication_name.as_str());
        entry.add_field("year", record.year.as_str());
        entry.add_optional_field("volume", &record.volume);
        entry.add_optional_field("number", &record.number);
        entry.add_optional_field("pages", &record.pages);
        entry.add_optional_field("publisher", &record.publisher);
        entry
    } else {
        let mut entry = BibTeXEntry::new(cite_key(record), BibTeXEntryType::InProceedings);
        entry.add_field("title", record.title.as_str());
        entry.add_field("author", authors);
        entry.add_field("booktitle", record.publication_name.as_str());
        entry.add_field("year", record.year.as_str());
        entry.add_optional_field("pages", &record.pages);
        entry.add_optional_field("publisher", &record.publisher);
        entry
    }
}

/// Format an entry as `@type{key,\n  field={{value}},\n  ...\n}`.
pub fn format_entry(entry: &BibTeXEntry) -> String {
    let fields = entry
        .fields
        .iter()
        .map(|f| format!("{}={{{{{}}}}}", f.key, f.value))
        .collect::<Vec<_>>()
        .join(",\n  ");

    format!(
        "@{}{{{},\n  {}\n}}",
        entry.entry_type.as_str(),
        entry.cite_key,
        fields
    )
}
