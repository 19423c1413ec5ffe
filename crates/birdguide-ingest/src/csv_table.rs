use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// A CSV file loaded whole into memory, cells normalized to trimmed strings.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a named column, after header normalization.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of the first matching column out of several accepted names.
    pub fn column_index_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|name| self.column_index(name))
    }

    /// The cell at `(row, column)`, or an empty string when the row is short.
    pub fn cell<'a>(&'a self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map_or("", String::as_str)
    }
}

/// Options controlling how a source file is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Number of non-data preamble rows to discard before reading.
    pub skip_rows: usize,
    /// Whether the first retained row is a header row. When false, synthetic
    /// `Column_<n>` names are assigned.
    pub has_header: bool,
}

impl IngestOptions {
    /// Default options for an ordinary CSV with a header row.
    pub fn headered() -> Self {
        Self {
            skip_rows: 0,
            has_header: true,
        }
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file with a header row into a [`CsvTable`].
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    read_csv_table_with_options(path, IngestOptions::headered())
}

/// Reads a CSV file into a [`CsvTable`], discarding a fixed-size preamble
/// and optionally treating the file as headerless.
///
/// Rows may be ragged; short rows keep their cells as read and missing cells
/// read back as empty via [`CsvTable::cell`].
pub fn read_csv_table_with_options(path: &Path, options: IngestOptions) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read {}", path.display()))?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    if options.skip_rows > 0 {
        rows.drain(..options.skip_rows.min(rows.len()));
    }

    let headers: Vec<String> = if options.has_header {
        if rows.is_empty() {
            anyhow::bail!("no header row in {}", path.display());
        }
        rows.remove(0).iter().map(|cell| normalize_header(cell)).collect()
    } else {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        (1..=width).map(|index| format!("Column_{index}")).collect()
    };

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded csv table"
    );
    Ok(CsvTable { headers, rows })
}
