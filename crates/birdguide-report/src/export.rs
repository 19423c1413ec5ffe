//! CSV serialization of the displayed study guide table.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};

use birdguide_ingest::any_to_string;
use birdguide_model::Region;

/// Default export filename for a region: spaces in the region name are
/// replaced by underscores.
pub fn export_filename(region: Region) -> String {
    format!("Study_Guide_{}.csv", region.as_str().replace(' ', "_"))
}

/// Serializes a table as comma-separated text, header row first.
pub fn study_guide_csv_bytes(table: &DataFrame) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(table.get_column_names().iter().map(|name| name.as_str()))
        .context("write csv header")?;
    let columns = table.get_columns();
    for index in 0..table.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(column.get(index).unwrap_or(AnyValue::Null)))
            .collect();
        writer.write_record(&record).context("write csv row")?;
    }
    writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("finish csv export: {error}"))
}

/// Writes the displayed table to `path` as CSV.
pub fn write_study_guide_csv(table: &DataFrame, path: &Path) -> Result<()> {
    let bytes = study_guide_csv_bytes(table)?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = table.height(), "study guide exported");
    Ok(())
}
