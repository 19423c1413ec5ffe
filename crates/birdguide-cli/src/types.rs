use std::collections::BTreeSet;
use std::path::PathBuf;

use polars::prelude::DataFrame;

use birdguide_core::{CascadeOptions, PlaceDetail, Selection};
use birdguide_model::{Place, Region, RegionMapping, Status};

#[derive(Debug)]
pub struct GuideResult {
    pub region: Region,
    /// The displayed (merged, possibly filtered) table.
    pub table: DataFrame,
    pub checklist_species: usize,
    /// Selected statuses, or `None` when filtering was disabled.
    pub selected: Option<BTreeSet<Status>>,
    pub export_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RegionsResult {
    pub selection: Selection,
    pub options: CascadeOptions,
    pub rows: Vec<RegionMapping>,
    /// Place name the selection was seeded from, when a seed was applied.
    pub seeded_from: Option<String>,
}

#[derive(Debug)]
pub struct PlaceResult {
    pub detail: PlaceDetail,
    /// Other places in the resolved region, sorted by county then name.
    pub region_places: Vec<Place>,
}
