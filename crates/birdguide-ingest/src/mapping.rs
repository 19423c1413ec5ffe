//! Region-mapping and place table loading.

use std::path::Path;

use anyhow::{Context, Result};
use birdguide_model::{GuideError, Place, RegionMapping};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::polars_utils::parse_f64;

const REGION_ID: &str = "Region ID";
const DISPLAY_NAME: &str = "Region Display Name";
const MACRO_REGION: &str = "Macro Region";
const COUNTRY: &str = "Country";
const STATE_PROVINCE: &str = "State/Province";
const NOTES: &str = "Notes / Description";
const BCR_NUMBERS: &str = "BCR Number(s)";
const FLAGSHIP_SPECIES: &str = "Flagship Species";
const SEASONALITY: &str = "Seasonality Focus / Special Field Notes";

/// Loads `region_mapping.csv` into typed rows.
///
/// The key columns (`Region ID`, `Region Display Name`, `Macro Region`,
/// `State/Province`) are required; the descriptive columns are optional.
pub fn load_region_mappings(path: &Path) -> Result<Vec<RegionMapping>> {
    let table = read_csv_table(path)?;
    let mappings = region_mappings_from_table(&table)
        .with_context(|| format!("load region mapping {}", path.display()))?;
    tracing::info!(path = %path.display(), regions = mappings.len(), "region mapping loaded");
    Ok(mappings)
}

/// Parses region-mapping rows out of a loaded table.
pub fn region_mappings_from_table(table: &CsvTable) -> Result<Vec<RegionMapping>> {
    let region_id = required_column(table, REGION_ID)?;
    let display_name = required_column(table, DISPLAY_NAME)?;
    let macro_region = required_column(table, MACRO_REGION)?;
    let state_province = required_column(table, STATE_PROVINCE)?;
    let country = table.column_index(COUNTRY);
    let notes = table.column_index(NOTES);
    let bcr_numbers = table.column_index(BCR_NUMBERS);
    let flagship_species = table.column_index(FLAGSHIP_SPECIES);
    let seasonality = table.column_index(SEASONALITY);

    let mut mappings = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let id = table.cell(row, region_id);
        if id.is_empty() {
            continue;
        }
        mappings.push(RegionMapping {
            region_id: id.to_string(),
            display_name: table.cell(row, display_name).to_string(),
            macro_region: table.cell(row, macro_region).to_string(),
            country: optional_cell(table, row, country).unwrap_or_default(),
            state_province: table.cell(row, state_province).to_string(),
            notes: optional_cell(table, row, notes),
            bcr_numbers: optional_cell(table, row, bcr_numbers),
            flagship_species: optional_cell(table, row, flagship_species),
            seasonality: optional_cell(table, row, seasonality),
        });
    }
    Ok(mappings)
}

/// Loads a place table (`places_enriched.csv` / `place_mapping.csv`).
///
/// The name column may be headed `Place` or `Place Name`; coordinates that
/// do not parse are kept as `None` rather than failing the load.
pub fn load_places(path: &Path) -> Result<Vec<Place>> {
    let table = read_csv_table(path)?;
    let places = places_from_table(&table)
        .with_context(|| format!("load places {}", path.display()))?;
    tracing::info!(path = %path.display(), places = places.len(), "place table loaded");
    Ok(places)
}

/// Parses place rows out of a loaded table.
pub fn places_from_table(table: &CsvTable) -> Result<Vec<Place>> {
    let name = table
        .column_index_any(&["Place", "Place Name"])
        .ok_or_else(|| GuideError::MissingColumn("Place".to_string()))?;
    let region_id = required_column(table, REGION_ID)?;
    let state = table.column_index("State");
    let county = table.column_index("County Name");
    let latitude = table.column_index("Latitude");
    let longitude = table.column_index("Longitude");

    let mut places = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let place_name = table.cell(row, name);
        if place_name.is_empty() {
            continue;
        }
        places.push(Place {
            name: place_name.to_string(),
            state: optional_cell(table, row, state).unwrap_or_default(),
            county: optional_cell(table, row, county).unwrap_or_default(),
            latitude: optional_cell(table, row, latitude).as_deref().and_then(parse_f64),
            longitude: optional_cell(table, row, longitude).as_deref().and_then(parse_f64),
            region_id: table.cell(row, region_id).to_string(),
        });
    }
    Ok(places)
}

fn required_column(table: &CsvTable, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| GuideError::MissingColumn(name.to_string()).into())
}

fn optional_cell(table: &CsvTable, row: &[String], index: Option<usize>) -> Option<String> {
    let value = table.cell(row, index?);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
