//! Master checklist loading.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use birdguide_model::{COMMON_NAME, GuideError};

use crate::csv_table::{CsvTable, read_csv_table};

/// Builds an all-string DataFrame from a loaded CSV table.
///
/// Every source column is carried through untouched; the frame is the
/// currency of the merge and filter stages downstream.
pub fn dataframe_from_table(table: &CsvTable) -> Result<DataFrame> {
    let columns: Vec<Column> = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let values: Vec<String> = table
                .rows
                .iter()
                .map(|row| table.cell(row, index).to_string())
                .collect();
            Series::new(header.as_str().into(), values).into_column()
        })
        .collect();
    DataFrame::new(columns).context("build dataframe from csv table")
}

/// Converts a loaded checklist table into a DataFrame, verifying the
/// species join key is present.
pub fn checklist_from_table(table: &CsvTable) -> Result<DataFrame> {
    if table.column_index(COMMON_NAME).is_none() {
        return Err(GuideError::MissingColumn(COMMON_NAME.to_string()).into());
    }
    dataframe_from_table(table)
}

/// Loads the master checklist CSV.
///
/// A missing file or a checklist without a `Common Name` column is fatal
/// for the run.
pub fn load_checklist(path: &Path) -> Result<DataFrame> {
    let table = read_csv_table(path)?;
    let frame = checklist_from_table(&table)
        .with_context(|| format!("load checklist {}", path.display()))?;
    tracing::info!(path = %path.display(), species = frame.height(), "checklist loaded");
    Ok(frame)
}
