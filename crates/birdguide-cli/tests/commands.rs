//! Integration tests for the command layer, driven through parsed CLI args.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use birdguide_cli::cli::{Cli, Command};
use birdguide_cli::commands::{run_guide, run_place, run_regions};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("birdguide_cli_{}_{stamp}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse cli args")
}

#[test]
fn guide_command_merges_filters_and_exports() {
    let dir = temp_dir();
    let checklist = write(
        &dir,
        "ABA_Checklist.csv",
        "Common Name,Scientific Name\n\
         American Robin,Turdus migratorius\n\
         Gyrfalcon,Falco rusticolus\n\
         Great Gray Owl,Strix nebulosa\n",
    );
    let region = write(
        &dir,
        "PNW.csv",
        "Common Name,Status\nAmerican Robin,Common\nGyrfalcon,Accidental\n",
    );
    let export = dir.join("guide.csv");

    let cli = parse(&[
        "birdguide",
        "guide",
        "--checklist",
        checklist.to_str().unwrap(),
        "--region",
        "pnw",
        "--region-file",
        region.to_str().unwrap(),
        "--export",
        export.to_str().unwrap(),
    ]);
    let Command::Guide(args) = cli.command else {
        panic!("expected guide command");
    };
    let result = run_guide(&args).expect("run guide");

    assert_eq!(result.checklist_species, 3);
    // Default selection keeps Common..Rare: the Accidental and the
    // unmatched (Absent) species are filtered out.
    assert_eq!(result.table.height(), 1);
    assert_eq!(result.export_path.as_deref(), Some(export.as_path()));

    let text = fs::read_to_string(&export).expect("read export");
    assert!(text.starts_with("Common Name,"));
    assert!(text.contains("American Robin"));
    assert!(!text.contains("Gyrfalcon"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn guide_command_handles_raw_frequency_exports() {
    let dir = temp_dir();
    let checklist = write(&dir, "ABA_Checklist.csv", "Common Name\nAmerican Robin\n");
    let mut raw = String::new();
    for row in 0..16 {
        raw.push_str(&format!("preamble {row},x\n"));
    }
    raw.push_str("American Robin,12%,13%\n");
    let region = write(&dir, "Washington.csv", &raw);

    let cli = parse(&[
        "birdguide",
        "guide",
        "--checklist",
        checklist.to_str().unwrap(),
        "--region-file",
        region.to_str().unwrap(),
        "--raw",
        "--all",
    ]);
    let Command::Guide(args) = cli.command else {
        panic!("expected guide command");
    };
    let result = run_guide(&args).expect("run guide");
    assert_eq!(result.table.height(), 1);
    assert!(result.selected.is_none());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_region_file_is_fatal() {
    let dir = temp_dir();
    let checklist = write(&dir, "ABA_Checklist.csv", "Common Name\nAmerican Robin\n");
    let cli = parse(&[
        "birdguide",
        "guide",
        "--checklist",
        checklist.to_str().unwrap(),
        "--region-file",
        dir.join("missing.csv").to_str().unwrap(),
    ]);
    let Command::Guide(args) = cli.command else {
        panic!("expected guide command");
    };
    assert!(run_guide(&args).is_err());
    let _ = fs::remove_dir_all(&dir);
}

const MAPPING_CSV: &str = "Region ID,Region Display Name,Macro Region,Country,State/Province\n\
     R01,Puget Sound Lowlands,Western,USA,Washington\n\
     R02,Okanogan Highlands,Western,USA,Washington\n\
     R03,Willamette Valley,Western,USA,Oregon\n\
     R04,Sonoran Desert,Southwestern,USA,Arizona\n";

#[test]
fn regions_command_cascades_and_reports_zero_rows() {
    let dir = temp_dir();
    let mapping = write(&dir, "region_mapping.csv", MAPPING_CSV);

    let cli = parse(&[
        "birdguide",
        "regions",
        "--mapping",
        mapping.to_str().unwrap(),
        "--macro-region",
        "Western",
        "--state",
        "Washington",
    ]);
    let Command::Regions(args) = cli.command else {
        panic!("expected regions command");
    };
    let result = run_regions(&args).expect("run regions");
    // Selecting a state never narrows the macro-region option list.
    assert!(result.options.macro_regions.contains(&"Southwestern".to_string()));
    assert_eq!(result.rows.len(), 2);
    assert!(result.rows.iter().all(|row| row.state_province == "Washington"));

    // A contradictory selection is a zero-row outcome, not an error.
    let cli = parse(&[
        "birdguide",
        "regions",
        "--mapping",
        mapping.to_str().unwrap(),
        "--macro-region",
        "Southwestern",
        "--state",
        "Washington",
    ]);
    let Command::Regions(args) = cli.command else {
        panic!("expected regions command");
    };
    let result = run_regions(&args).expect("run regions");
    assert!(result.rows.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn regions_command_seeds_from_place_unless_overridden() {
    let dir = temp_dir();
    let mapping = write(&dir, "region_mapping.csv", MAPPING_CSV);
    let places = write(
        &dir,
        "places_enriched.csv",
        "Place,State,County Name,Latitude,Longitude,Region ID\n\
         Nisqually NWR,WA,Thurston,47.07,-122.71,R01\n",
    );

    let cli = parse(&[
        "birdguide",
        "regions",
        "--mapping",
        mapping.to_str().unwrap(),
        "--places",
        places.to_str().unwrap(),
        "--place",
        "Nisqually NWR",
    ]);
    let Command::Regions(args) = cli.command else {
        panic!("expected regions command");
    };
    let result = run_regions(&args).expect("run regions");
    assert_eq!(result.seeded_from.as_deref(), Some("Nisqually NWR"));
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].region_id, "R01");

    // Explicit selector flags take precedence over the seed.
    let cli = parse(&[
        "birdguide",
        "regions",
        "--mapping",
        mapping.to_str().unwrap(),
        "--places",
        places.to_str().unwrap(),
        "--place",
        "Nisqually NWR",
        "--macro-region",
        "Southwestern",
    ]);
    let Command::Regions(args) = cli.command else {
        panic!("expected regions command");
    };
    let result = run_regions(&args).expect("run regions");
    assert!(result.seeded_from.is_none());
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].region_id, "R04");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn place_command_degrades_on_unresolved_region_id() {
    let dir = temp_dir();
    let mapping = write(&dir, "region_mapping.csv", MAPPING_CSV);
    let places = write(
        &dir,
        "places_enriched.csv",
        "Place,State,County Name,Latitude,Longitude,Region ID\n\
         Lost Lagoon,WA,Unknown,0,0,R99\n",
    );

    let cli = parse(&[
        "birdguide",
        "place",
        "Lost Lagoon",
        "--places",
        places.to_str().unwrap(),
        "--mapping",
        mapping.to_str().unwrap(),
    ]);
    let Command::Place(args) = cli.command else {
        panic!("expected place command");
    };
    let result = run_place(&args).expect("run place");
    assert!(result.detail.region.is_none());
    assert!(result.region_places.is_empty());

    let _ = fs::remove_dir_all(&dir);
}
