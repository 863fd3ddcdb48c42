//! One-shot generation runs: read, normalize, render, write
//!
//! Each run reads the whole sheet, renders in memory and writes each
//! artifact once. Any error aborts the run.

use crate::config::PubsConfig;
use crate::domain::PublicationRecord;
use crate::error::PubsResult;
use crate::export::{html, json, latex, HtmlOptions, LatexOptions};
use crate::normalize::normalize_rows;
use crate::source::read_rows;
use crate::thumbnail::ThumbnailResolver;
use crate::writer::{write_output, WriteSummary};

/// Read and normalize every record of the configured input.
pub fn load_records(config: &PubsConfig) -> PubsResult<Vec<PublicationRecord>> {
    let rows = read_rows(&config.paths.input)?;
    let thumbnails = ThumbnailResolver::new(&config.paths.thumbnail_dir);
    Ok(normalize_rows(&rows, &thumbnails))
}

/// Write the JSON document of all publications.
pub fn generate_json(config: &PubsConfig) -> PubsResult<WriteSummary> {
    let records = load_records(config)?;
    let text = json::render_document(&records)?;
    write_output(&config.paths.json_output, &text)?;
    Ok(WriteSummary::new(
        records.len(),
        &config.paths.json_output,
        "entries",
    ))
}

/// Write the full and the selected LaTeX fragments, in that order.
pub fn generate_latex(config: &PubsConfig) -> PubsResult<Vec<WriteSummary>> {
    let records = load_records(config)?;
    let options = LatexOptions::from(config);

    let full = latex::render_full(&records, &options);
    let selected = latex::render_selected(&records, &options);

    write_output(&config.paths.latex_output, &full.text)?;
    write_output(&config.paths.selected_latex_output, &selected.text)?;

    Ok(vec![
        WriteSummary::new(full.count, &config.paths.latex_output, "entries"),
        WriteSummary::new(
            selected.count,
            &config.paths.selected_latex_output,
            "entries",
        ),
    ])
}

/// Write the HTML blocks of the selected publications.
pub fn generate_selected_html(config: &PubsConfig) -> PubsResult<WriteSummary> {
    let records = load_records(config)?;
    let rendered = html::render_selected(&records, &HtmlOptions::from(config));
    write_output(&config.paths.html_output, &rendered.text)?;
    Ok(WriteSummary::new(
        rendered.count,
        &config.paths.html_output,
        "selected publications",
    ))
}
