pub mod cascade;
pub mod lookup;
pub mod session;
pub mod status_filter;
pub mod study_guide;

pub use cascade::{CascadeOptions, Selection, apply_selection, derive_options, seed_from_place};
pub use lookup::{PlaceDetail, find_place, lookup_place_region, places_in_region};
pub use session::GuideSession;
pub use status_filter::{default_status_selection, filter_by_status};
pub use study_guide::{SUBREGION_NOTES_COLUMN, build_study_guide, region_scope_note};
