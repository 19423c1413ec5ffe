//! Record types for the region-mapping and place tables.

use serde::{Deserialize, Serialize};

use crate::enums::Status;

/// Column name of the species join key, shared by every checklist and
/// region data file.
pub const COMMON_NAME: &str = "Common Name";

/// One species status row produced by a region data loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStatus {
    pub common_name: String,
    pub status: Status,
}

/// One row of the region-mapping table.
///
/// `region_id` is the unique key and the sole linkage from a place to its
/// region metadata. The descriptive fields are free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMapping {
    pub region_id: String,
    pub display_name: String,
    pub macro_region: String,
    pub country: String,
    pub state_province: String,
    pub notes: Option<String>,
    pub bcr_numbers: Option<String>,
    pub flagship_species: Option<String>,
    pub seasonality: Option<String>,
}

/// One row of the place table.
///
/// `region_id` is a foreign key into the region-mapping table; an
/// unresolved key is a recoverable not-found condition, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub state: String,
    pub county: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub region_id: String,
}
