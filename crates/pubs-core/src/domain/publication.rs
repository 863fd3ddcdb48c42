//! Normalized publication record

use serde::{Deserialize, Serialize};

use crate::text::ParsedAuthors;

/// Publication category used to group list output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationType {
    Conference,
    Journal,
    Other,
}

impl PublicationType {
    /// All categories in output order
    pub const ALL: [PublicationType; 3] = [
        PublicationType::Conference,
        PublicationType::Journal,
        PublicationType::Other,
    ];

    /// Classify a free-form type value (case-insensitive substring match).
    ///
    /// `conf` is checked before `journal`.
    pub fn classify(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered.contains("conf") {
            Self::Conference
        } else if lowered.contains("journal") {
            Self::Journal
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conference => "Conference",
            Self::Journal => "Journal",
            Self::Other => "Other",
        }
    }

    /// Plural heading for a section of this type
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Conference => "Conferences",
            Self::Journal => "Journals",
            Self::Other => "Others",
        }
    }
}

impl std::fmt::Display for PublicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// External links of a publication; absent kinds are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl Links {
    pub fn is_empty(&self) -> bool {
        self.pdf.is_none() && self.code.is_none() && self.project.is_none()
    }

    /// Preferred target for the title link: project page, paper, then code
    pub fn primary(&self) -> Option<&str> {
        self.project
            .as_deref()
            .or(self.pdf.as_deref())
            .or(self.code.as_deref())
    }
}

/// One publication, derived once from a raw row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    pub title: String,
    /// Author field without surrounding quotes or whitespace
    pub authors_raw: String,
    /// Author tokens as written in the sheet
    pub author_tokens: Vec<String>,
    pub authors: ParsedAuthors,
    pub venue_abbrev: String,
    pub year: String,
    pub publication_name: String,
    /// `"{abbrev} {year}"`, or the publication name when both are empty
    pub venue: String,
    /// `"{abbrev} {year}"` without fallback
    pub venue_tag: String,
    pub type_raw: String,
    pub pub_type: PublicationType,
    pub selected: bool,
    pub links: Links,
    pub thumbnail: String,
    pub pages: String,
    pub volume: String,
    pub number: String,
    pub publisher: String,
}

impl PublicationRecord {
    /// Whether the raw type names a journal; decides the BibTeX entry type.
    ///
    /// Differs from `pub_type == Journal` for values like "Conference/Journal".
    pub fn is_journal_like(&self) -> bool {
        self.type_raw.to_lowercase().contains("journal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(PublicationType::classify("Conference"), PublicationType::Conference);
        assert_eq!(PublicationType::classify(" conf. paper "), PublicationType::Conference);
        assert_eq!(PublicationType::classify("JOURNAL"), PublicationType::Journal);
        assert_eq!(PublicationType::classify("Preprint"), PublicationType::Other);
        assert_eq!(PublicationType::classify(""), PublicationType::Other);
        assert_eq!(
            PublicationType::classify("Conference Journal"),
            PublicationType::Conference
        );
    }

    #[test]
    fn test_section_titles() {
        let titles: Vec<_> = PublicationType::ALL
            .iter()
            .map(PublicationType::section_title)
            .collect();
        assert_eq!(titles, vec!["Conferences", "Journals", "Others"]);
    }

    #[test]
    fn test_links_primary() {
        let links = Links {
            pdf: Some("p".into()),
            code: Some("c".into()),
            project: None,
        };
        assert_eq!(links.primary(), Some("p"));
        assert_eq!(Links::default().primary(), None);
        assert!(Links::default().is_empty());
    }

    #[test]
    fn test_links_serialize_omits_absent() {
        let links = Links {
            pdf: Some("http://x".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&links).unwrap(),
            r#"{"pdf":"http://x"}"#
        );
        assert_eq!(serde_json::to_string(&Links::default()).unwrap(), "{}");
    }
}
