//! Status filtering over a merged study guide.

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};

use birdguide_model::{Region, Status};

use birdguide_ingest::any_to_string;

/// The default selection presented to the user: Common, Fairly Common,
/// Uncommon, and Rare. Accidental and Absent are excluded.
pub fn default_status_selection() -> BTreeSet<Status> {
    Status::default_selection().into_iter().collect()
}

/// Keeps only rows whose status for `region` is in the selected set.
///
/// A pure predicate over already-merged data: idempotent, and an empty
/// result is a valid zero-count outcome, not an error.
pub fn filter_by_status(
    guide: &DataFrame,
    region: Region,
    selected: &BTreeSet<Status>,
) -> Result<DataFrame> {
    let column = guide
        .column(region.as_str())
        .with_context(|| format!("study guide has no `{region}` column"))?;
    let mask: Vec<bool> = (0..guide.height())
        .map(|index| {
            let value = any_to_string(column.get(index).unwrap_or(AnyValue::Null));
            Status::from_str(value.trim())
                .map(|status| selected.contains(&status))
                .unwrap_or(false)
        })
        .collect();
    let mask = BooleanChunked::from_slice("status_mask".into(), &mask);
    guide.filter(&mask).context("filter study guide by status")
}
