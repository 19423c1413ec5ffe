use std::fs;
use std::path::PathBuf;

use birdguide_ingest::{
    IngestOptions, TableCache, load_checklist, load_places, load_region_mappings,
    load_region_statuses, load_region_statuses_raw, read_csv_table_with_options,
};
use birdguide_model::Status;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("birdguide_ingest_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

fn raw_region_contents() -> String {
    // 16 metadata rows, then headerless frequency data.
    let mut contents = String::new();
    for row in 0..16 {
        contents.push_str(&format!("meta {row},notes\n"));
    }
    contents.push_str("American Robin,12%,13%\n");
    contents.push_str("Gyrfalcon,0.1%,0%\n");
    contents.push_str("Great Gray Owl,0%,0%\n");
    contents
}

#[test]
fn reads_checklist_with_descriptive_columns() {
    let path = temp_file(
        "ABA_Checklist.csv",
        "Common Name,Scientific Name\nAmerican Robin,Turdus migratorius\n",
    );
    let frame = load_checklist(&path).expect("load checklist");
    assert_eq!(frame.height(), 1);
    assert!(frame.column("Scientific Name").is_ok());
    cleanup(&path);
}

#[test]
fn missing_checklist_file_is_fatal() {
    let path = PathBuf::from("/nonexistent/ABA_Checklist.csv");
    assert!(load_checklist(&path).is_err());
}

#[test]
fn raw_region_load_skips_preamble_and_derives_statuses() {
    let path = temp_file("Washington.csv", &raw_region_contents());
    let statuses = load_region_statuses_raw(&path).expect("load raw region data");
    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses[0].common_name, "American Robin");
    assert_eq!(statuses[0].status, Status::Common); // mean 12.5
    assert_eq!(statuses[1].status, Status::Accidental); // mean 0.05
    assert_eq!(statuses[2].status, Status::Absent); // mean 0
    cleanup(&path);
}

#[test]
fn preamble_skip_handles_short_files() {
    let path = temp_file("short.csv", "only,row\n");
    let table = read_csv_table_with_options(
        &path,
        IngestOptions {
            skip_rows: 16,
            has_header: false,
        },
    )
    .expect("read short file");
    assert!(table.rows.is_empty());
    cleanup(&path);
}

#[test]
fn reads_precleaned_region_file() {
    let path = temp_file(
        "PNW.csv",
        "Common Name,Status\nAmerican Robin,Common\nGyrfalcon,Rare\n",
    );
    let statuses = load_region_statuses(&path).expect("load region data");
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[1].status, Status::Rare);
    cleanup(&path);
}

#[test]
fn precleaned_region_file_rejects_unknown_status() {
    let path = temp_file("bad.csv", "Common Name,Status\nAmerican Robin,Mythical\n");
    let error = load_region_statuses(&path).unwrap_err();
    assert!(format!("{error:#}").contains("American Robin"));
    cleanup(&path);
}

#[test]
fn reads_region_mapping_and_places() {
    let mapping_path = temp_file(
        "region_mapping.csv",
        "Region ID,Region Display Name,Macro Region,Country,State/Province,Notes / Description\n\
         R01,Puget Sound Lowlands,Western,USA,Washington,Wintering waterfowl\n\
         R02,Okanagan Valley,Western,Canada,British Columbia,\n",
    );
    let mappings = load_region_mappings(&mapping_path).expect("load mapping");
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0].notes.as_deref(), Some("Wintering waterfowl"));
    assert_eq!(mappings[1].notes, None);
    cleanup(&mapping_path);

    let places_path = temp_file(
        "places_enriched.csv",
        "Place,State,County Name,Latitude,Longitude,Region ID\n\
         Nisqually NWR,WA,Thurston,47.07,-122.71,R01\n",
    );
    let places = load_places(&places_path).expect("load places");
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].region_id, "R01");
    assert_eq!(places[0].latitude, Some(47.07));
    cleanup(&places_path);
}

#[test]
fn table_cache_reuses_first_load() {
    let path = temp_file("cached.csv", "Common Name,Status\nAmerican Robin,Common\n");
    let cache = TableCache::new();
    let first = cache
        .get_or_load(&path, IngestOptions::headered())
        .expect("first load");
    assert_eq!(first.rows.len(), 1);

    // Rewriting the file must not be observed: the cache never invalidates.
    fs::write(&path, "Common Name,Status\nAmerican Robin,Common\nGyrfalcon,Rare\n")
        .expect("rewrite file");
    let second = cache
        .get_or_load(&path, IngestOptions::headered())
        .expect("second load");
    assert_eq!(second.rows.len(), 1);
    cleanup(&path);
}
