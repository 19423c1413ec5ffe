//! Region status loading: raw frequency exports and pre-cleaned files.

use std::path::Path;

use anyhow::{Context, Result};
use birdguide_model::{COMMON_NAME, GuideError, RegionStatus, Status};

use crate::csv_table::{CsvTable, IngestOptions, read_csv_table, read_csv_table_with_options};
use crate::polars_utils::parse_f64;

/// Number of metadata rows preceding the data in a raw eBird frequency
/// export.
pub const RAW_PREAMBLE_ROWS: usize = 16;

/// Column name of the `Status` column in a pre-cleaned region file.
pub const STATUS_COLUMN: &str = "Status";

/// Loads a raw eBird frequency export and derives one status per species.
///
/// The file has a fixed 16-row preamble and no header row; the first column
/// is the species common name and the remaining columns are
/// percentage-formatted frequencies. Each row's status is the arithmetic
/// mean of its frequencies mapped through the fixed thresholds. Cells that
/// do not parse as a percentage count as zero in the mean.
pub fn load_region_statuses_raw(path: &Path) -> Result<Vec<RegionStatus>> {
    let options = IngestOptions {
        skip_rows: RAW_PREAMBLE_ROWS,
        has_header: false,
    };
    let mut table = read_csv_table_with_options(path, options)
        .with_context(|| format!("load raw region data {}", path.display()))?;
    table.headers = synthetic_frequency_headers(table.headers.len());
    let statuses = statuses_from_raw_table(&table);
    tracing::info!(path = %path.display(), species = statuses.len(), "raw region data loaded");
    Ok(statuses)
}

/// Synthetic column names for a headerless frequency table:
/// `Common Name`, then `Freq_1..Freq_n`.
pub fn synthetic_frequency_headers(width: usize) -> Vec<String> {
    let mut headers = Vec::with_capacity(width);
    if width > 0 {
        headers.push(COMMON_NAME.to_string());
        for index in 1..width {
            headers.push(format!("Freq_{index}"));
        }
    }
    headers
}

/// Derives per-species statuses from a preamble-stripped frequency table.
pub fn statuses_from_raw_table(table: &CsvTable) -> Vec<RegionStatus> {
    let mut statuses = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let name = table.cell(row, 0);
        if name.is_empty() {
            continue;
        }
        let mean = mean_frequency(&row[1..]);
        statuses.push(RegionStatus {
            common_name: name.to_string(),
            status: Status::from_mean_frequency(mean),
        });
    }
    statuses
}

/// Arithmetic mean of percentage-formatted cells. The percent sign is
/// stripped before parsing; unparseable cells count as zero.
fn mean_frequency(cells: &[String]) -> f64 {
    if cells.is_empty() {
        return 0.0;
    }
    let total: f64 = cells
        .iter()
        .map(|cell| parse_f64(&cell.replace('%', "")).unwrap_or(0.0))
        .sum();
    total / cells.len() as f64
}

/// Loads a pre-cleaned region file with `Common Name` and `Status` columns.
pub fn load_region_statuses(path: &Path) -> Result<Vec<RegionStatus>> {
    let table = read_csv_table(path)?;
    let statuses = statuses_from_table(&table)
        .with_context(|| format!("load region data {}", path.display()))?;
    tracing::info!(path = %path.display(), species = statuses.len(), "region data loaded");
    Ok(statuses)
}

/// Parses statuses out of a pre-cleaned region table.
pub fn statuses_from_table(table: &CsvTable) -> Result<Vec<RegionStatus>> {
    let name_index = table
        .column_index(COMMON_NAME)
        .ok_or_else(|| GuideError::MissingColumn(COMMON_NAME.to_string()))?;
    let status_index = table
        .column_index(STATUS_COLUMN)
        .ok_or_else(|| GuideError::MissingColumn(STATUS_COLUMN.to_string()))?;

    let mut statuses = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let name = table.cell(row, name_index);
        if name.is_empty() {
            continue;
        }
        let status: Status = table
            .cell(row, status_index)
            .parse()
            .with_context(|| format!("status for `{name}`"))?;
        statuses.push(RegionStatus {
            common_name: name.to_string(),
            status,
        });
    }
    Ok(statuses)
}
