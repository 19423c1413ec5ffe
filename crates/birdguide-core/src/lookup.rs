//! Place-to-region lookup through the `Region ID` foreign key.

use birdguide_model::{Place, RegionMapping};

/// A place paired with its resolved region metadata.
///
/// `region` is `None` when the place's `Region ID` has no row in the
/// region-mapping table; callers render that as a not-found notice with
/// placeholder fields instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetail {
    pub place: Place,
    pub region: Option<RegionMapping>,
}

/// Finds a place by name, first match wins on duplicates.
pub fn find_place<'a>(places: &'a [Place], name: &str) -> Option<&'a Place> {
    let needle = name.trim();
    places.iter().find(|place| place.name.eq_ignore_ascii_case(needle))
}

/// Resolves a place name to its detail view.
///
/// Returns `None` only for an unknown place name; an unresolved `Region ID`
/// still yields a detail with `region: None`.
pub fn lookup_place_region(
    places: &[Place],
    mappings: &[RegionMapping],
    name: &str,
) -> Option<PlaceDetail> {
    let place = find_place(places, name)?.clone();
    let region = mappings
        .iter()
        .find(|mapping| mapping.region_id == place.region_id)
        .cloned();
    if region.is_none() {
        tracing::warn!(
            place = %place.name,
            region_id = %place.region_id,
            "place references a region id with no mapping row"
        );
    }
    Some(PlaceDetail { place, region })
}

/// All places belonging to a region, sorted by county then place name.
pub fn places_in_region<'a>(places: &'a [Place], region_id: &str) -> Vec<&'a Place> {
    let mut matching: Vec<&Place> = places
        .iter()
        .filter(|place| place.region_id == region_id)
        .collect();
    matching.sort_by(|a, b| (&a.county, &a.name).cmp(&(&b.county, &b.name)));
    matching
}
