//! Session-scoped memoization of the merged study guide.

use anyhow::Result;
use polars::prelude::DataFrame;

use birdguide_model::{Region, RegionStatus};

use crate::study_guide::build_study_guide;

/// A user session over one loaded checklist.
///
/// The merged (pre-filter) study guide is memoized in a single slot keyed
/// by the selected region: the first access computes it, later accesses
/// with the same region reuse it, and selecting a different region
/// replaces the slot. Status filtering always runs on top of the memoized
/// table and never touches the slot. Sessions are not shared.
#[derive(Debug)]
pub struct GuideSession {
    checklist: DataFrame,
    memo: Option<(Region, DataFrame)>,
}

impl GuideSession {
    pub fn new(checklist: DataFrame) -> Self {
        Self {
            checklist,
            memo: None,
        }
    }

    /// Number of species in the loaded checklist.
    pub fn checklist_len(&self) -> usize {
        self.checklist.height()
    }

    /// The merged study guide for `region`, computed on first access.
    ///
    /// On a memo hit the cached merge is returned as-is; `statuses` is only
    /// read when the slot is (re)computed.
    pub fn study_guide(&mut self, region: Region, statuses: &[RegionStatus]) -> Result<DataFrame> {
        if let Some((cached_region, guide)) = &self.memo {
            if *cached_region == region {
                tracing::debug!(region = %region, "study guide memo hit");
                return Ok(guide.clone());
            }
        }
        let guide = build_study_guide(&self.checklist, region, statuses)?;
        self.memo = Some((region, guide.clone()));
        Ok(guide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birdguide_ingest::any_to_string;
    use birdguide_model::{COMMON_NAME, Status};
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn checklist() -> DataFrame {
        let column: Column =
            Series::new(COMMON_NAME.into(), vec!["American Robin".to_string()]).into_column();
        DataFrame::new(vec![column]).unwrap()
    }

    fn statuses(status: Status) -> Vec<RegionStatus> {
        vec![RegionStatus {
            common_name: "American Robin".to_string(),
            status,
        }]
    }

    #[test]
    fn same_region_reuses_the_memoized_merge() {
        let mut session = GuideSession::new(checklist());
        let first = session
            .study_guide(Region::Pnw, &statuses(Status::Common))
            .unwrap();
        // Different statuses, same region: the memo is authoritative.
        let second = session
            .study_guide(Region::Pnw, &statuses(Status::Rare))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn region_change_invalidates_the_slot() {
        let mut session = GuideSession::new(checklist());
        session
            .study_guide(Region::Pnw, &statuses(Status::Common))
            .unwrap();
        let oregon = session
            .study_guide(Region::Oregon, &statuses(Status::Rare))
            .unwrap();
        let oregon_cell = any_to_string(oregon.column("Oregon").unwrap().get(0).unwrap());
        assert_eq!(oregon_cell, "Rare");
        // Coming back recomputes rather than resurrecting the old slot.
        let back = session
            .study_guide(Region::Pnw, &statuses(Status::Uncommon))
            .unwrap();
        let pnw_cell = any_to_string(back.column("PNW").unwrap().get(0).unwrap());
        assert_eq!(pnw_cell, "Uncommon");
    }
}
