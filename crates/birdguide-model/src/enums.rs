//! Type-safe enumerations for the study-guide domain.
//!
//! These enums give compile-time safety to concepts that are represented as
//! plain strings in the source CSV files: the abundance status scale and the
//! fixed set of region columns a study guide carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GuideError;

/// Abundance status of a species within a region.
///
/// An ordered categorical scale derived from mean checklist frequency.
/// `Absent` is the fill value for checklist species with no regional match,
/// so a merged study guide never contains a null status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    /// Mean frequency above 10%.
    Common,
    /// Mean frequency above 3%.
    FairlyCommon,
    /// Mean frequency above 1%.
    Uncommon,
    /// Mean frequency above 0.1%.
    Rare,
    /// Mean frequency above 0%.
    Accidental,
    /// Never recorded, or no regional data for the species.
    Absent,
}

impl Status {
    /// Every status value, ordered from most to least frequent.
    pub const ALL: [Status; 6] = [
        Status::Common,
        Status::FairlyCommon,
        Status::Uncommon,
        Status::Rare,
        Status::Accidental,
        Status::Absent,
    ];

    /// Returns the canonical name as it appears in region data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Common => "Common",
            Status::FairlyCommon => "Fairly Common",
            Status::Uncommon => "Uncommon",
            Status::Rare => "Rare",
            Status::Accidental => "Accidental",
            Status::Absent => "Absent",
        }
    }

    /// Maps a mean checklist frequency (in percent) onto the status scale.
    ///
    /// Thresholds: >10 Common, >3 Fairly Common, >1 Uncommon, >0.1 Rare,
    /// >0 Accidental, else Absent.
    pub fn from_mean_frequency(mean: f64) -> Status {
        if mean > 10.0 {
            Status::Common
        } else if mean > 3.0 {
            Status::FairlyCommon
        } else if mean > 1.0 {
            Status::Uncommon
        } else if mean > 0.1 {
            Status::Rare
        } else if mean > 0.0 {
            Status::Accidental
        } else {
            Status::Absent
        }
    }

    /// Sort order on the scale, most frequent first.
    pub fn sort_order(&self) -> u8 {
        match self {
            Status::Common => 1,
            Status::FairlyCommon => 2,
            Status::Uncommon => 3,
            Status::Rare => 4,
            Status::Accidental => 5,
            Status::Absent => 6,
        }
    }

    /// Returns true for statuses a birder would realistically study:
    /// everything except `Accidental` and `Absent`. This is the default
    /// status-filter selection.
    pub fn is_expected(&self) -> bool {
        !matches!(self, Status::Accidental | Status::Absent)
    }

    /// The default status-filter selection: Common through Rare.
    pub fn default_selection() -> Vec<Status> {
        Status::ALL.into_iter().filter(Status::is_expected).collect()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = GuideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().replace(['-', '_'], " ").to_lowercase();
        match normalized.as_str() {
            "common" => Ok(Status::Common),
            "fairly common" => Ok(Status::FairlyCommon),
            "uncommon" => Ok(Status::Uncommon),
            "rare" => Ok(Status::Rare),
            "accidental" => Ok(Status::Accidental),
            "absent" => Ok(Status::Absent),
            _ => Err(GuideError::Message(format!("unknown status `{value}`"))),
        }
    }
}

/// The fixed set of region columns a study guide carries.
///
/// Each merged study guide has one status column per region; regions other
/// than the one a run was scoped to are populated with `Absent` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Pnw,
    Arizona,
    NorthernCalifornia,
    BritishColumbia,
    Idaho,
    California,
    Oregon,
}

impl Region {
    /// Every known region, in study-guide column order.
    pub const ALL: [Region; 7] = [
        Region::Pnw,
        Region::Arizona,
        Region::NorthernCalifornia,
        Region::BritishColumbia,
        Region::Idaho,
        Region::California,
        Region::Oregon,
    ];

    /// Returns the region name as used for the study-guide column header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Pnw => "PNW",
            Region::Arizona => "Arizona",
            Region::NorthernCalifornia => "Northern California",
            Region::BritishColumbia => "British Columbia",
            Region::Idaho => "Idaho",
            Region::California => "California",
            Region::Oregon => "Oregon",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = GuideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().replace(['-', '_'], " ").to_lowercase();
        match normalized.as_str() {
            "pnw" => Ok(Region::Pnw),
            "arizona" => Ok(Region::Arizona),
            "northern california" => Ok(Region::NorthernCalifornia),
            "british columbia" => Ok(Region::BritishColumbia),
            "idaho" => Ok(Region::Idaho),
            "california" => Ok(Region::California),
            "oregon" => Ok(Region::Oregon),
            _ => Err(GuideError::Message(format!("unknown region `{value}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(Status::from_mean_frequency(12.5), Status::Common);
        assert_eq!(Status::from_mean_frequency(10.0), Status::FairlyCommon);
        assert_eq!(Status::from_mean_frequency(2.0), Status::Uncommon);
        assert_eq!(Status::from_mean_frequency(0.5), Status::Rare);
        assert_eq!(Status::from_mean_frequency(0.05), Status::Accidental);
        assert_eq!(Status::from_mean_frequency(0.0), Status::Absent);
    }

    #[test]
    fn status_round_trips() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert_eq!("fairly-common".parse::<Status>().unwrap(), Status::FairlyCommon);
        assert!("mythical".parse::<Status>().is_err());
    }

    #[test]
    fn default_selection_excludes_accidental_and_absent() {
        let selection = Status::default_selection();
        assert_eq!(
            selection,
            vec![
                Status::Common,
                Status::FairlyCommon,
                Status::Uncommon,
                Status::Rare
            ]
        );
        assert!(!selection.contains(&Status::Accidental));
        assert!(!selection.contains(&Status::Absent));
    }

    #[test]
    fn region_round_trips() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
        }
        assert_eq!(
            "northern-california".parse::<Region>().unwrap(),
            Region::NorthernCalifornia
        );
        assert!("atlantis".parse::<Region>().is_err());
    }
}
