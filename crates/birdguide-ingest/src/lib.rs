pub mod cache;
pub mod checklist;
pub mod csv_table;
pub mod frequency;
pub mod mapping;
pub mod polars_utils;

pub use cache::TableCache;
pub use checklist::{checklist_from_table, dataframe_from_table, load_checklist};
pub use csv_table::{CsvTable, IngestOptions, read_csv_table, read_csv_table_with_options};
pub use frequency::{
    RAW_PREAMBLE_ROWS, STATUS_COLUMN, load_region_statuses, load_region_statuses_raw,
    statuses_from_raw_table, statuses_from_table, synthetic_frequency_headers,
};
pub use mapping::{
    load_places, load_region_mappings, places_from_table, region_mappings_from_table,
};
pub use polars_utils::{any_to_string, format_numeric, parse_f64};
