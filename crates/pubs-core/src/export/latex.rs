//! LaTeX CV fragments
//!
//! Two fragments share one layout: a section heading, then one `enumerate`
//! list per non-empty publication type. Items carry the venue tag as their
//! label, followed by title, links, authors and publication details.

use super::Rendered;
use crate::config::PubsConfig;
use crate::domain::PublicationRecord;
use crate::group::GroupedPublications;
use crate::normalize::venue_tag;
use crate::text::escape_latex;

/// Options line of every `enumerate` list; the widest label sets the indent
const ENUMERATE_OPTIONS: &str = r"\begin{enumerate}[leftmargin=*, labelsep=0.5em, align=left, widest={\textbf{NeurIPS 2024}}, itemindent=0em, label={\textbf{[\arabic*]}}]";

/// Link columns in output order with their labels
const LINK_LABELS: [&str; 3] = ["paper", "code", "page"];

/// Options for LaTeX rendering
#[derive(Debug, Clone)]
pub struct LatexOptions {
    pub full_heading: String,
    pub selected_heading: String,
    pub full_list_url: String,
    /// Author name to underline
    pub highlight_author: Option<String>,
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self::from(&PubsConfig::default())
    }
}

impl From<&PubsConfig> for LatexOptions {
    fn from(config: &PubsConfig) -> Self {
        Self {
            full_heading: config.latex.full_heading.clone(),
            selected_heading: config.latex.selected_heading.clone(),
            full_list_url: config.latex.full_list_url.clone(),
            highlight_author: config.highlight_author.clone(),
        }
    }
}

impl LatexOptions {
    /// Heading block of the full list
    pub fn full_header(&self) -> String {
        [
            r"\vspace{0.2cm}".to_string(),
            format!(r"\section{{\textbf{{{}}}}}", self.full_heading),
            String::new(),
        ]
        .join("\n")
    }

    /// Heading block of the selected list, with a link to the full list
    pub fn selected_header(&self) -> String {
        [
            r"\vspace{0.2cm}".to_string(),
            format!(
                r"\section{{\textbf{{{}}} \hfill \textcolor{{darkblue}} {{\scriptsize \href{{{}}}{{Full List}}}}}}",
                self.selected_heading, self.full_list_url
            ),
            String::new(),
        ]
        .join("\n")
    }
}

/// `\,[\href{url}{paper}, ...] \\`, or a bare `\\` when there are no links.
pub fn format_links(record: &PublicationRecord) -> String {
    let urls = [
        record.links.pdf.as_deref(),
        record.links.code.as_deref(),
        record.links.project.as_deref(),
    ];

    let links: Vec<String> = LINK_LABELS
        .iter()
        .zip(urls)
        .filter_map(|(label, url)| url.map(|u| format!(r"\href{{{}}}{{{}}}", u, label)))
        .collect();

    if links.is_empty() {
        r"\\".to_string()
    } else {
        format!(r"\,[{}] \\", links.join(", "))
    }
}

/// Escaped author line with the highlighted author underlined.
fn format_authors(record: &PublicationRecord, highlight: Option<&str>) -> String {
    let authors = escape_latex(&record.authors_raw);
    match highlight {
        Some(name) => {
            let name = escape_latex(name);
            authors.replace(&name, &format!(r"\underline{{{}}}", name))
        }
        None => authors,
    }
}

/// One `\item` block, ending in a blank line.
///
/// The year is emitted as written; every other free-text field is escaped.
pub fn format_item(record: &PublicationRecord, highlight: Option<&str>) -> String {
    let venue = venue_tag(&escape_latex(&record.venue_abbrev), &record.year);
    let title = escape_latex(&record.title);
    let authors = format_authors(record, highlight);

    let details = [
        escape_latex(&record.publication_name),
        record.year.clone(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    [
        format!(r"\item[\textbf{{{}}}]", venue),
        format!(r"\textbf{{{}}}", title),
        format_links(record),
        format!(r"{{\it {}}} \\", authors),
        format!(r"{{\small \textit{{{}}}}}", details),
        String::new(),
    ]
    .join("\n")
}

/// Render a heading and one list per non-empty type section.
pub fn render_grouped(
    records: &[PublicationRecord],
    header: &str,
    highlight: Option<&str>,
) -> Rendered {
    let grouped = GroupedPublications::from_records(records);

    let mut lines = vec![header.to_string()];
    let mut count = 0;
    for (pub_type, entries) in grouped.sections() {
        lines.push(format!(
            r"\noindent{{\large\textit{{{}}}}}",
            pub_type.section_title()
        ));
        lines.push(ENUMERATE_OPTIONS.to_string());
        for record in entries {
            lines.push(format_item(record, highlight));
            count += 1;
        }
        lines.push(r"\end{enumerate}".to_string());
        lines.push(String::new());
    }

    Rendered {
        text: lines.join("\n"),
        count,
    }
}

/// The full publication list.
pub fn render_full(records: &[PublicationRecord], options: &LatexOptions) -> Rendered {
    render_grouped(
        records,
        &options.full_header(),
        options.highlight_author.as_deref(),
    )
}

/// The selected publication list.
pub fn render_selected(records: &[PublicationRecord], options: &LatexOptions) -> Rendered {
    let selected = crate::normalize::select(records);
    render_grouped(
        &selected,
        &options.selected_header(),
        options.highlight_author.as_deref(),
    )
}
