//! HTML blocks for the selected publications section of the site

use super::Rendered;
use crate::bibtex::{bibtex_entry, format_entry};
use crate::config::PubsConfig;
use crate::domain::PublicationRecord;
use crate::text::escape_html;

/// Title link target when a record has no links at all
const NO_LINK: &str = "#";

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Author name rendered with the `me` class
    pub highlight_author: Option<String>,
    /// Append the BibTeX citation to each block
    pub embed_bibtex: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::from(&PubsConfig::default())
    }
}

impl From<&PubsConfig> for HtmlOptions {
    fn from(config: &PubsConfig) -> Self {
        Self {
            highlight_author: config.highlight_author.clone(),
            embed_bibtex: config.html.embed_bibtex,
        }
    }
}

/// One rendered block together with its citation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPublication {
    pub html: String,
    pub cite_key: String,
    pub bibtex: String,
}

/// Author spans joined by `, `; the highlighted author gets `class="author me"`.
pub fn render_authors_html(names: &[String], highlight: Option<&str>) -> String {
    let highlight = highlight.map(str::to_lowercase);
    names
        .iter()
        .map(|name| {
            let is_me = highlight
                .as_deref()
                .is_some_and(|h| name.to_lowercase().contains(h));
            let class = if is_me { "author me" } else { "author" };
            format!(r#"<span class="{}">{}</span>"#, class, escape_html(name))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `abbrev &middot; year &middot;` with each part escaped on its own.
fn venue_line(record: &PublicationRecord) -> String {
    format!(
        "{} &middot; {} &middot;",
        escape_html(&record.venue_abbrev),
        escape_html(&record.year)
    )
}

fn links_block(record: &PublicationRecord) -> String {
    let links = [
        (record.links.project.as_deref(), "Project page"),
        (record.links.pdf.as_deref(), "Paper"),
        (record.links.code.as_deref(), "Code"),
    ];

    links
        .into_iter()
        .filter_map(|(url, label)| {
            url.map(|u| format!(r#"<a href="{}" class="pub-link">{}</a>"#, escape_html(u), label))
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// Render one publication block and its citation.
pub fn render_publication(record: &PublicationRecord, options: &HtmlOptions) -> RenderedPublication {
    let entry = bibtex_entry(record);
    let bibtex = format_entry(&entry);

    let main_link = record.links.primary().unwrap_or(NO_LINK);
    let authors_html =
        render_authors_html(&record.authors.display, options.highlight_author.as_deref());

    let mut lines = vec![
        String::new(),
        r#"                <div class="publication">"#.to_string(),
        format!(
            r#"                    <img src="{}" ></img>"#,
            escape_html(&record.thumbnail)
        ),
        r#"                    <div class="pub-info">"#.to_string(),
        format!(
            r#"                        <p><strong><a href="{}">{}</a></strong><br>"#,
            escape_html(main_link),
            escape_html(&record.title)
        ),
        format!("                        {}<br>", authors_html),
        format!(
            r#"                        <span class="conference">{}</span><br>"#,
            venue_line(record)
        ),
        "                        </p>".to_string(),
        r#"                        <div class="pub-links">"#.to_string(),
        format!("        {}", links_block(record)),
        "                        </div>".to_string(),
    ];
    if options.embed_bibtex {
        lines.push(format!(
            r#"                        <pre class="pub-bibtex">{}</pre>"#,
            escape_html(&bibtex)
        ));
    }
    lines.push("                    </div>".to_string());
    lines.push("                </div>".to_string());

    RenderedPublication {
        html: lines.join("\n"),
        cite_key: entry.cite_key,
        bibtex,
    }
}

/// Render the selected records, blocks separated by a blank line.
pub fn render_selected(records: &[PublicationRecord], options: &HtmlOptions) -> Rendered {
    let blocks: Vec<String> = records
        .iter()
        .filter(|r| r.selected)
        .map(|r| {
            let rendered = render_publication(r, options);
            tracing::debug!(cite_key = %rendered.cite_key, "rendered publication block");
            rendered.html
        })
        .collect();

    Rendered {
        count: blocks.len(),
        text: blocks.join("\n\n"),
    }
}
