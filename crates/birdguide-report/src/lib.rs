pub mod export;

pub use export::{export_filename, study_guide_csv_bytes, write_study_guide_csv};
