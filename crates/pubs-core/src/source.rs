//! Record source reader
//!
//! Reads the publication spreadsheet export into one [`RawRow`] per data row.
//! The header row is required; the author column has an empty header.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{PubsError, PubsResult};

/// Known column names of the publication sheet
pub mod columns {
    pub const AUTHORS: &str = "";
    pub const TITLE: &str = "Title";
    pub const ABBREVIATE: &str = "Abbreviate";
    pub const YEAR: &str = "Year";
    pub const PUBLICATION: &str = "Publication";
    pub const TYPE: &str = "Type";
    pub const SELECTED: &str = "Selected";
    pub const PAPER: &str = "Paper";
    pub const CODE: &str = "Code";
    pub const PAGE: &str = "Page";
    pub const PAGES: &str = "Pages";
    pub const VOLUME: &str = "Volume";
    pub const NUMBER: &str = "Number";
    pub const PUBLISHER: &str = "Publisher";
    pub const THUMBNAIL: &str = "thumbnail";
}

/// One data row keyed by header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set a column value
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw value of a column, or `""` when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value of a column
    pub fn get_trimmed(&self, column: &str) -> &str {
        self.get(column).trim()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// Read every row of a CSV file.
///
/// The file handle is dropped before returning.
pub fn read_rows(path: impl AsRef<Path>) -> PubsResult<Vec<RawRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PubsError::io(path, e))?;
    let rows = read_rows_from_reader(BufReader::new(file))?;
    tracing::info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read every row from any CSV source.
///
/// Short rows leave their trailing columns absent; cells beyond the header
/// width are ignored. A repeated header name keeps its last cell.
pub fn read_rows_from_reader<R: Read>(reader: R) -> PubsResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers.iter().zip(record.iter()).collect();
        rows.push(row);
    }

    Ok(rows)
}
