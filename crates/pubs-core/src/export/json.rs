//! JSON document renderer

use serde::{Deserialize, Serialize};

use crate::domain::{Links, PublicationRecord};
use crate::error::PubsResult;

/// One entry of the `publications` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPublication {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub thumbnail: String,
    /// `1` when selected, else `0`
    pub selected: u8,
    /// Always empty; the site fills awards by hand
    pub award: String,
    pub links: Links,
}

impl From<&PublicationRecord> for JsonPublication {
    fn from(record: &PublicationRecord) -> Self {
        Self {
            title: record.title.clone(),
            authors: record.author_tokens.clone(),
            venue: record.venue.clone(),
            thumbnail: record.thumbnail.clone(),
            selected: u8::from(record.selected),
            award: String::new(),
            links: record.links.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonDocument {
    publications: Vec<JsonPublication>,
}

/// Render `{"publications": [...]}` with two-space indentation, in input order.
pub fn render_document(records: &[PublicationRecord]) -> PubsResult<String> {
    let document = JsonDocument {
        publications: records.iter().map(JsonPublication::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_row;
    use crate::source::RawRow;
    use crate::thumbnail::ThumbnailResolver;
    use serde_json::{json, Value};

    #[test]
    fn test_render_example_entry() {
        let row = RawRow::new()
            .with("Title", "Fast Caching!!")
            .with("Abbreviate", "NeurIPS")
            .with("Year", "2024")
            .with("Selected", "Yes")
            .with("Paper", "http://x");
        let record = normalize_row(&row, &ThumbnailResolver::new("pub_thumbnails"));

        let text = render_document(&[record]).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            json!({
                "publications": [{
                    "title": "Fast Caching!!",
                    "authors": [],
                    "venue": "NeurIPS 2024",
                    "thumbnail": "pub_thumbnails/fast_caching.png",
                    "selected": 1,
                    "award": "",
                    "links": {"pdf": "http://x"}
                }]
            })
        );
    }

    #[test]
    fn test_field_order_and_indent() {
        let record = normalize_row(&RawRow::new(), &ThumbnailResolver::new("t"));
        let text = render_document(&[record]).unwrap();

        let expected = r#"{
  "publications": [
    {
      "title": "",
      "authors": [],
      "venue": "",
      "thumbnail": "t/publication.png",
      "selected": 0,
      "award": "",
      "links": {}
    }
  ]
}"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_authors_keep_sheet_form() {
        let row = RawRow::new().with("", "Tran, Minh; Lee, Sam");
        let record = normalize_row(&row, &ThumbnailResolver::new("t"));
        let entry = JsonPublication::from(&record);
        assert_eq!(entry.authors, vec!["Tran, Minh", "Lee, Sam"]);
    }

    #[test]
    fn test_empty_document() {
        let text = render_document(&[]).unwrap();
        assert_eq!(text, "{\n  \"publications\": []\n}");
    }
}
