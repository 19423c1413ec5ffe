//! Cascading region selection: macro region, then state/province, then
//! display region, each level narrowing the candidates below it.

use std::collections::BTreeSet;

use birdguide_model::{Place, RegionMapping};

use crate::lookup::find_place;

/// The three current selections. Each set is an "any of" predicate; an
/// empty set leaves that dimension unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub macro_regions: BTreeSet<String>,
    pub states: BTreeSet<String>,
    pub display_regions: BTreeSet<String>,
}

impl Selection {
    pub fn is_unrestricted(&self) -> bool {
        self.macro_regions.is_empty() && self.states.is_empty() && self.display_regions.is_empty()
    }
}

/// Candidate option sets for the three selectors, each sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOptions {
    pub macro_regions: Vec<String>,
    pub states: Vec<String>,
    pub display_regions: Vec<String>,
}

fn admits(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(String::from).collect()
}

/// Recomputes the candidate option sets from the current selections.
///
/// Macro-region options are never narrowed; state options are narrowed by
/// the macro selection only; display options by macro and state. Levels are
/// never narrowed by selections below them, so picking a state cannot
/// remove a macro region from its option list.
pub fn derive_options(rows: &[RegionMapping], selection: &Selection) -> CascadeOptions {
    let macro_regions = distinct_sorted(rows.iter().map(|row| row.macro_region.as_str()));
    let states = distinct_sorted(
        rows.iter()
            .filter(|row| admits(&selection.macro_regions, &row.macro_region))
            .map(|row| row.state_province.as_str()),
    );
    let display_regions = distinct_sorted(
        rows.iter()
            .filter(|row| {
                admits(&selection.macro_regions, &row.macro_region)
                    && admits(&selection.states, &row.state_province)
            })
            .map(|row| row.display_name.as_str()),
    );
    CascadeOptions {
        macro_regions,
        states,
        display_regions,
    }
}

/// Applies all three selections as one combined predicate and sorts the
/// surviving rows by macro region, state/province, then display name.
///
/// An empty result renders as zero rows; it is never an error.
pub fn apply_selection<'a>(
    rows: &'a [RegionMapping],
    selection: &Selection,
) -> Vec<&'a RegionMapping> {
    let mut filtered: Vec<&RegionMapping> = rows
        .iter()
        .filter(|row| {
            admits(&selection.macro_regions, &row.macro_region)
                && admits(&selection.states, &row.state_province)
                && admits(&selection.display_regions, &row.display_name)
        })
        .collect();
    filtered.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    filtered
}

fn sort_key(row: &RegionMapping) -> (&str, &str, &str, &str) {
    (
        &row.macro_region,
        &row.state_province,
        &row.display_name,
        &row.region_id,
    )
}

/// Seeds a selection from a known place by resolving its region mapping.
///
/// A convenience default, not a constraint: the caller may broaden or
/// contradict it through the selectors afterwards. Returns `None` when the
/// place or its region mapping cannot be resolved.
pub fn seed_from_place(
    place_name: &str,
    places: &[Place],
    rows: &[RegionMapping],
) -> Option<Selection> {
    let place = find_place(places, place_name)?;
    let mapping = rows.iter().find(|row| row.region_id == place.region_id)?;
    Some(Selection {
        macro_regions: [mapping.macro_region.clone()].into_iter().collect(),
        states: [mapping.state_province.clone()].into_iter().collect(),
        display_regions: [mapping.display_name.clone()].into_iter().collect(),
    })
}
