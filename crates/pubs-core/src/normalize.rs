//! Field normalizer: raw rows to [`PublicationRecord`]s
//!
//! Total over any input. Missing columns read as empty strings and every
//! derived field has a defined value for empty input.

use crate::domain::{Links, PublicationRecord, PublicationType};
use crate::source::{columns, RawRow};
use crate::text::{clean_author_field, parse_authors, split_authors};
use crate::thumbnail::ThumbnailResolver;

/// Token that marks a row as selected (case-insensitive)
const SELECTED_TOKEN: &str = "yes";

/// Build a normalized record from one raw row.
pub fn normalize_row(row: &RawRow, thumbnails: &ThumbnailResolver) -> PublicationRecord {
    let title = row.get_trimmed(columns::TITLE).to_string();
    let raw_authors = row.get(columns::AUTHORS);
    let venue_abbrev = row.get_trimmed(columns::ABBREVIATE).to_string();
    let year = row.get_trimmed(columns::YEAR).to_string();
    let publication_name = row.get_trimmed(columns::PUBLICATION).to_string();
    let type_raw = row.get_trimmed(columns::TYPE).to_string();

    let venue_tag = venue_tag(&venue_abbrev, &year);
    let venue = if venue_abbrev.is_empty() && year.is_empty() {
        publication_name.clone()
    } else {
        venue_tag.clone()
    };

    let thumbnail = match row.get_trimmed(columns::THUMBNAIL) {
        "" => thumbnails.resolve(&title),
        explicit => explicit.to_string(),
    };

    PublicationRecord {
        authors_raw: clean_author_field(raw_authors).to_string(),
        author_tokens: split_authors(raw_authors),
        authors: parse_authors(raw_authors),
        pub_type: PublicationType::classify(&type_raw),
        selected: is_selected(row.get(columns::SELECTED)),
        links: collect_links(row),
        pages: row.get_trimmed(columns::PAGES).to_string(),
        volume: row.get_trimmed(columns::VOLUME).to_string(),
        number: row.get_trimmed(columns::NUMBER).to_string(),
        publisher: row.get_trimmed(columns::PUBLISHER).to_string(),
        title,
        venue_abbrev,
        year,
        publication_name,
        venue,
        venue_tag,
        type_raw,
        thumbnail,
    }
}

/// Normalize every row, preserving order.
pub fn normalize_rows(rows: &[RawRow], thumbnails: &ThumbnailResolver) -> Vec<PublicationRecord> {
    rows.iter()
        .map(|row| {
            let record = normalize_row(row, thumbnails);
            tracing::debug!(
                title = %record.title,
                venue = %record.venue,
                pub_type = %record.pub_type,
                selected = record.selected,
                "normalized record"
            );
            record
        })
        .collect()
}

/// The selected subset, in original order.
pub fn select(records: &[PublicationRecord]) -> Vec<PublicationRecord> {
    records.iter().filter(|r| r.selected).cloned().collect()
}

/// `"{abbrev} {year}"` trimmed; a lone part is kept as-is.
pub fn venue_tag(abbrev: &str, year: &str) -> String {
    format!("{} {}", abbrev.trim(), year.trim()).trim().to_string()
}

/// Exact case-insensitive match against "yes" after trimming.
pub fn is_selected(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(SELECTED_TOKEN)
}

fn collect_links(row: &RawRow) -> Links {
    let link = |column: &str| match row.get_trimmed(column) {
        "" => None,
        url => Some(url.to_string()),
    };

    Links {
        pdf: link(columns::PAPER),
        code: link(columns::CODE),
        project: link(columns::PAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ThumbnailResolver {
        ThumbnailResolver::new("pub_thumbnails")
    }

    #[test]
    fn test_normalize_example_row() {
        let row = RawRow::new()
            .with("Title", "Fast Caching!!")
            .with("Abbreviate", "NeurIPS")
            .with("Year", "2024")
            .with("Selected", "Yes")
            .with("Paper", "http://x");

        let record = normalize_row(&row, &resolver());
        assert_eq!(record.title, "Fast Caching!!");
        assert_eq!(record.venue, "NeurIPS 2024");
        assert!(record.selected);
        assert_eq!(record.links.pdf.as_deref(), Some("http://x"));
        assert_eq!(record.links.code, None);
        assert_eq!(record.thumbnail, "pub_thumbnails/fast_caching.png");
    }

    #[test]
    fn test_venue_fallback_to_publication() {
        let row = RawRow::new().with("Publication", " Journal of Things ");
        let record = normalize_row(&row, &resolver());
        assert_eq!(record.venue, "Journal of Things");
        assert_eq!(record.venue_tag, "");
    }

    #[test]
    fn test_venue_single_part() {
        assert_eq!(venue_tag("ICML", ""), "ICML");
        assert_eq!(venue_tag("", "2023"), "2023");
        assert_eq!(venue_tag(" CVPR ", " 2022 "), "CVPR 2022");
    }

    #[test]
    fn test_selected_flag() {
        assert!(is_selected("yes"));
        assert!(is_selected(" YES "));
        assert!(!is_selected("y"));
        assert!(!is_selected("yes please"));
        assert!(!is_selected(""));
    }

    #[test]
    fn test_blank_links_omitted() {
        let row = RawRow::new()
            .with("Paper", "   ")
            .with("Code", "https://github.com/x")
            .with("Page", "");
        let record = normalize_row(&row, &resolver());
        assert_eq!(record.links.pdf, None);
        assert_eq!(record.links.code.as_deref(), Some("https://github.com/x"));
        assert_eq!(record.links.project, None);
    }

    #[test]
    fn test_explicit_thumbnail_wins() {
        let row = RawRow::new()
            .with("Title", "Anything")
            .with("thumbnail", " img/custom.gif ");
        let record = normalize_row(&row, &resolver());
        assert_eq!(record.thumbnail, "img/custom.gif");
    }

    #[test]
    fn test_empty_row_is_total() {
        let record = normalize_row(&RawRow::new(), &resolver());
        assert_eq!(record.title, "");
        assert!(record.authors.is_empty());
        assert_eq!(record.pub_type, PublicationType::Other);
        assert!(!record.selected);
        assert!(record.links.is_empty());
        assert_eq!(record.thumbnail, "pub_thumbnails/publication.png");
    }

    #[test]
    fn test_authors_both_forms() {
        let row = RawRow::new().with("", "\"Tran, Minh; Lee, Sam\"");
        let record = normalize_row(&row, &resolver());
        assert_eq!(record.authors_raw, "Tran, Minh; Lee, Sam");
        assert_eq!(record.author_tokens, vec!["Tran, Minh", "Lee, Sam"]);
        assert_eq!(record.authors.display, vec!["Minh Tran", "Sam Lee"]);
    }

    #[test]
    fn test_select_preserves_order() {
        let rows: Vec<RawRow> = ["yes", "no", "Yes", ""]
            .iter()
            .enumerate()
            .map(|(i, flag)| {
                RawRow::new()
                    .with("Title", format!("Paper {}", i))
                    .with("Selected", *flag)
            })
            .collect();
        let records = normalize_rows(&rows, &resolver());
        let titles: Vec<_> = select(&records).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Paper 0", "Paper 2"]);
    }
}
