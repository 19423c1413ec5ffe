//! Study guide assembly: checklist joined against region statuses.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use birdguide_model::{COMMON_NAME, Region, RegionStatus, Status};

use birdguide_ingest::any_to_string;

/// Column name of the free-text note stamped on every study guide row.
pub const SUBREGION_NOTES_COLUMN: &str = "Subregion Notes";

/// The note stamped on a study guide identifying the run's region scope.
pub fn region_scope_note(region: Region) -> String {
    format!("Run scoped to {region} data only.")
}

/// Builds a study guide: a left join of the checklist against region
/// statuses on `Common Name`.
///
/// Every checklist row appears exactly once regardless of matches. The
/// target region column takes the matched status or `Absent`; every other
/// known region column is populated with `Absent` as a placeholder. When
/// the region table carries duplicate keys, the first occurrence wins.
pub fn build_study_guide(
    checklist: &DataFrame,
    region: Region,
    statuses: &[RegionStatus],
) -> Result<DataFrame> {
    let names = checklist
        .column(COMMON_NAME)
        .context("checklist has no `Common Name` column")?
        .clone();

    let mut lookup: BTreeMap<&str, Status> = BTreeMap::new();
    for entry in statuses {
        let key = entry.common_name.trim();
        if lookup.contains_key(key) {
            tracing::debug!(species = key, "duplicate region key ignored, first match wins");
            continue;
        }
        lookup.insert(key, entry.status);
    }

    let height = checklist.height();
    let mut guide = checklist.clone();
    for column_region in Region::ALL {
        let values: Vec<String> = if column_region == region {
            (0..height)
                .map(|index| {
                    let name = any_to_string(names.get(index).unwrap_or(AnyValue::Null));
                    lookup
                        .get(name.trim())
                        .copied()
                        .unwrap_or(Status::Absent)
                        .as_str()
                        .to_string()
                })
                .collect()
        } else {
            vec![Status::Absent.as_str().to_string(); height]
        };
        guide
            .with_column(Series::new(column_region.as_str().into(), values))
            .with_context(|| format!("add `{column_region}` status column"))?;
    }
    guide
        .with_column(Series::new(
            SUBREGION_NOTES_COLUMN.into(),
            vec![region_scope_note(region); height],
        ))
        .context("add notes column")?;

    tracing::info!(
        region = %region,
        species = height,
        matched = lookup.len(),
        "study guide built"
    );
    Ok(guide)
}
