//! CLI argument definitions for the study guide tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use birdguide_model::{Region, Status};

#[derive(Parser)]
#[command(
    name = "birdguide",
    version,
    about = "Birding study guide generator - regional status for a master checklist",
    long_about = "Generate a regional study guide by joining a master species checklist\n\
                  against region frequency or status tables, browse the region-mapping\n\
                  table with cascading selectors, and look up place details."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a regional study guide from a checklist and region data.
    Guide(GuideArgs),

    /// Browse the region-mapping table with cascading selectors.
    Regions(RegionsArgs),

    /// Show a place and the region it belongs to.
    Place(PlaceArgs),

    /// List the abundance status scale and its frequency thresholds.
    Statuses,
}

#[derive(Parser)]
pub struct GuideArgs {
    /// Path to the master checklist CSV.
    #[arg(
        long = "checklist",
        value_name = "PATH",
        default_value = "ABA_Checklist.csv"
    )]
    pub checklist: PathBuf,

    /// Region the data file describes (also the status column populated).
    #[arg(long = "region", value_enum, default_value = "pnw")]
    pub region: RegionArg,

    /// Path to the region data CSV (default: <REGION>.csv with spaces
    /// replaced by underscores).
    #[arg(long = "region-file", value_name = "PATH")]
    pub region_file: Option<PathBuf>,

    /// Treat the region file as a raw eBird frequency export (16-row
    /// preamble, headerless, percentage columns) instead of a pre-cleaned
    /// `Common Name`/`Status` table.
    #[arg(long = "raw")]
    pub raw: bool,

    /// Status values to keep (repeatable). Defaults to common through rare.
    #[arg(long = "status", value_enum, value_name = "STATUS")]
    pub statuses: Vec<StatusArg>,

    /// Disable status filtering and keep every checklist row.
    #[arg(long = "all", conflicts_with = "statuses")]
    pub all: bool,

    /// Export the displayed table as CSV. An optional path overrides the
    /// default Study_Guide_<REGION>.csv filename.
    #[arg(long = "export", value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Maximum number of rows to display (the export is never truncated).
    #[arg(long = "limit", value_name = "N", default_value_t = 40)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct RegionsArgs {
    /// Path to the region-mapping CSV.
    #[arg(
        long = "mapping",
        value_name = "PATH",
        default_value = "region_mapping.csv"
    )]
    pub mapping: PathBuf,

    /// Restrict to these macro regions (repeatable).
    #[arg(long = "macro-region", value_name = "NAME")]
    pub macro_regions: Vec<String>,

    /// Restrict to these states/provinces (repeatable).
    #[arg(long = "state", value_name = "NAME")]
    pub states: Vec<String>,

    /// Restrict to these display regions (repeatable).
    #[arg(long = "display", value_name = "NAME")]
    pub display_regions: Vec<String>,

    /// Seed the selectors from a known place. Ignored when any selector
    /// flag is given: explicit selections take precedence over the seed.
    #[arg(long = "place", value_name = "NAME")]
    pub place: Option<String>,

    /// Path to the place table used to resolve --place.
    #[arg(
        long = "places",
        value_name = "PATH",
        default_value = "places_enriched.csv"
    )]
    pub places: PathBuf,

    /// Also print the candidate option sets for each selector.
    #[arg(long = "options")]
    pub show_options: bool,
}

#[derive(Parser)]
pub struct PlaceArgs {
    /// Place name to look up (first match wins on duplicates).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Path to the place table.
    #[arg(
        long = "places",
        value_name = "PATH",
        default_value = "places_enriched.csv"
    )]
    pub places: PathBuf,

    /// Path to the region-mapping CSV.
    #[arg(
        long = "mapping",
        value_name = "PATH",
        default_value = "region_mapping.csv"
    )]
    pub mapping: PathBuf,
}

/// CLI region choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum RegionArg {
    Pnw,
    Arizona,
    NorthernCalifornia,
    BritishColumbia,
    Idaho,
    California,
    Oregon,
}

impl From<RegionArg> for Region {
    fn from(value: RegionArg) -> Self {
        match value {
            RegionArg::Pnw => Region::Pnw,
            RegionArg::Arizona => Region::Arizona,
            RegionArg::NorthernCalifornia => Region::NorthernCalifornia,
            RegionArg::BritishColumbia => Region::BritishColumbia,
            RegionArg::Idaho => Region::Idaho,
            RegionArg::California => Region::California,
            RegionArg::Oregon => Region::Oregon,
        }
    }
}

/// CLI status choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Common,
    FairlyCommon,
    Uncommon,
    Rare,
    Accidental,
    Absent,
}

impl From<StatusArg> for Status {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Common => Status::Common,
            StatusArg::FairlyCommon => Status::FairlyCommon,
            StatusArg::Uncommon => Status::Uncommon,
            StatusArg::Rare => Status::Rare,
            StatusArg::Accidental => Status::Accidental,
            StatusArg::Absent => Status::Absent,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
