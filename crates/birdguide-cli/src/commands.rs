use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use birdguide_core::{
    GuideSession, Selection, apply_selection, default_status_selection, derive_options,
    filter_by_status, lookup_place_region, places_in_region, seed_from_place,
};
use birdguide_ingest::{
    IngestOptions, TableCache, checklist_from_table, load_region_statuses,
    load_region_statuses_raw, places_from_table, region_mappings_from_table,
};
use birdguide_model::{Region, RegionStatus, Status};
use birdguide_report::{export_filename, write_study_guide_csv};

use crate::cli::{GuideArgs, PlaceArgs, RegionsArgs};
use crate::types::{GuideResult, PlaceResult, RegionsResult};

/// Default region data file: the region name with spaces as underscores.
fn default_region_file(region: Region) -> PathBuf {
    PathBuf::from(format!("{}.csv", region.as_str().replace(' ', "_")))
}

pub fn run_guide(args: &GuideArgs) -> Result<GuideResult> {
    let region: Region = args.region.into();
    let span = info_span!("guide", region = %region);
    let _guard = span.enter();

    let cache = TableCache::new();
    let checklist_table = cache.get_or_load(&args.checklist, IngestOptions::headered())?;
    let checklist = checklist_from_table(checklist_table.as_ref())
        .with_context(|| format!("load checklist {}", args.checklist.display()))?;
    let checklist_species = checklist.height();

    let region_file = args
        .region_file
        .clone()
        .unwrap_or_else(|| default_region_file(region));
    let statuses: Vec<RegionStatus> = if args.raw {
        load_region_statuses_raw(&region_file)?
    } else {
        load_region_statuses(&region_file)?
    };

    let mut session = GuideSession::new(checklist);
    let guide = session.study_guide(region, &statuses)?;

    let (table, selected) = if args.all {
        (guide, None)
    } else {
        let selected: BTreeSet<Status> = if args.statuses.is_empty() {
            default_status_selection()
        } else {
            args.statuses.iter().map(|status| Status::from(*status)).collect()
        };
        let filtered = filter_by_status(&guide, region, &selected)?;
        (filtered, Some(selected))
    };

    let export_path = match &args.export {
        None => None,
        Some(path) => {
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(export_filename(region)));
            write_study_guide_csv(&table, &path)?;
            Some(path)
        }
    };

    info!(
        region = %region,
        species = checklist_species,
        shown = table.height(),
        "study guide ready"
    );
    Ok(GuideResult {
        region,
        table,
        checklist_species,
        selected,
        export_path,
    })
}

pub fn run_regions(args: &RegionsArgs) -> Result<RegionsResult> {
    let span = info_span!("regions");
    let _guard = span.enter();

    let cache = TableCache::new();
    let mapping_table = cache.get_or_load(&args.mapping, IngestOptions::headered())?;
    let mappings = region_mappings_from_table(mapping_table.as_ref())
        .with_context(|| format!("load region mapping {}", args.mapping.display()))?;

    let mut selection = Selection {
        macro_regions: args.macro_regions.iter().cloned().collect(),
        states: args.states.iter().cloned().collect(),
        display_regions: args.display_regions.iter().cloned().collect(),
    };
    let mut seeded_from = None;
    if let Some(place_name) = &args.place {
        // The seed is a convenience default only: explicit selector flags
        // always take precedence over it.
        if selection.is_unrestricted() {
            let places_table = cache.get_or_load(&args.places, IngestOptions::headered())?;
            let places = places_from_table(places_table.as_ref())
                .with_context(|| format!("load places {}", args.places.display()))?;
            match seed_from_place(place_name, &places, &mappings) {
                Some(seed) => {
                    selection = seed;
                    seeded_from = Some(place_name.clone());
                }
                None => {
                    warn!(place = %place_name, "seed place not resolvable, browsing unrestricted");
                }
            }
        } else {
            warn!(place = %place_name, "selector flags given, ignoring place seed");
        }
    }

    let options = derive_options(&mappings, &selection);
    let rows = apply_selection(&mappings, &selection)
        .into_iter()
        .cloned()
        .collect();
    Ok(RegionsResult {
        selection,
        options,
        rows,
        seeded_from,
    })
}

pub fn run_place(args: &PlaceArgs) -> Result<PlaceResult> {
    let span = info_span!("place", name = %args.name);
    let _guard = span.enter();

    let cache = TableCache::new();
    let places_table = cache.get_or_load(&args.places, IngestOptions::headered())?;
    let places = places_from_table(places_table.as_ref())
        .with_context(|| format!("load places {}", args.places.display()))?;
    let mapping_table = cache.get_or_load(&args.mapping, IngestOptions::headered())?;
    let mappings = region_mappings_from_table(mapping_table.as_ref())
        .with_context(|| format!("load region mapping {}", args.mapping.display()))?;

    let detail = lookup_place_region(&places, &mappings, &args.name)
        .ok_or_else(|| anyhow!("place `{}` not found in {}", args.name, args.places.display()))?;
    let region_places = detail
        .region
        .as_ref()
        .map(|region| {
            places_in_region(&places, &region.region_id)
                .into_iter()
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Ok(PlaceResult {
        detail,
        region_places,
    })
}
