use std::str::FromStr;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::AnyValue;

use birdguide_ingest::any_to_string;
use birdguide_model::Status;

use crate::types::{GuideResult, PlaceResult, RegionsResult};

pub fn print_guide_summary(result: &GuideResult, limit: usize) {
    println!("Region: {}", result.region);
    println!("Checklist species: {}", result.checklist_species);
    match &result.selected {
        Some(selected) => {
            let names: Vec<&str> = selected.iter().map(Status::as_str).collect();
            println!("Statuses: {}", names.join(", "));
        }
        None => println!("Statuses: all"),
    }
    if let Some(path) = &result.export_path {
        println!("Exported: {}", path.display());
    }

    let mut table = Table::new();
    let headers: Vec<Cell> = result
        .table
        .get_column_names()
        .iter()
        .map(|name| header_cell(name.as_str()))
        .collect();
    table.set_header(headers);
    apply_table_style(&mut table);

    let columns = result.table.get_columns();
    let shown = result.table.height().min(limit);
    for index in 0..shown {
        let row: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let value = any_to_string(column.get(index).unwrap_or(AnyValue::Null));
                value_cell(&value)
            })
            .collect();
        table.add_row(row);
    }
    println!("{table}");
    let total = result.table.height();
    if total > shown {
        println!("... and {} more rows (use --limit or --export)", total - shown);
    }
    println!("{total} species match");
}

pub fn print_regions_summary(result: &RegionsResult, show_options: bool) {
    if let Some(place) = &result.seeded_from {
        println!("Seeded from place: {place}");
    }
    if show_options {
        print_option_list("Macro regions", &result.options.macro_regions);
        print_option_list("States/provinces", &result.options.states);
        print_option_list("Display regions", &result.options.display_regions);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Macro Region"),
        header_cell("State/Province"),
        header_cell("Display Region"),
        header_cell("Region ID"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    for row in &result.rows {
        table.add_row(vec![
            Cell::new(&row.macro_region),
            Cell::new(&row.state_province),
            Cell::new(&row.display_name),
            Cell::new(&row.region_id),
            optional_cell(row.notes.as_deref()),
        ]);
    }
    println!("{table}");
    println!("{} regions matched", result.rows.len());
}

pub fn print_place_summary(result: &PlaceResult) {
    let place = &result.detail.place;
    println!("Place: {}", place.name);
    println!("State: {}", placeholder(&place.state));
    println!("County: {}", placeholder(&place.county));
    match (place.latitude, place.longitude) {
        (Some(lat), Some(lon)) => println!("Coordinates: {lat}, {lon}"),
        _ => println!("Coordinates: -"),
    }
    println!("Region ID: {}", placeholder(&place.region_id));

    match &result.detail.region {
        Some(region) => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Field"), header_cell("Value")]);
            apply_table_style(&mut table);
            table.add_row(vec![Cell::new("Display Region"), Cell::new(&region.display_name)]);
            table.add_row(vec![Cell::new("Macro Region"), Cell::new(&region.macro_region)]);
            table.add_row(vec![Cell::new("Country"), optional_cell(non_empty(&region.country))]);
            table.add_row(vec![
                Cell::new("State/Province"),
                Cell::new(&region.state_province),
            ]);
            table.add_row(vec![Cell::new("Notes"), optional_cell(region.notes.as_deref())]);
            table.add_row(vec![
                Cell::new("BCR Number(s)"),
                optional_cell(region.bcr_numbers.as_deref()),
            ]);
            table.add_row(vec![
                Cell::new("Flagship Species"),
                optional_cell(region.flagship_species.as_deref()),
            ]);
            table.add_row(vec![
                Cell::new("Seasonality"),
                optional_cell(region.seasonality.as_deref()),
            ]);
            println!("{table}");

            if !result.region_places.is_empty() {
                println!("Places in this region:");
                for sibling in &result.region_places {
                    println!("- {} ({})", sibling.name, placeholder(&sibling.county));
                }
            }
        }
        None => {
            println!(
                "Region not found: no mapping row for Region ID `{}`",
                place.region_id
            );
        }
    }
}

pub fn print_status_scale() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Mean Frequency"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let thresholds = [
        (Status::Common, "> 10%"),
        (Status::FairlyCommon, "> 3%"),
        (Status::Uncommon, "> 1%"),
        (Status::Rare, "> 0.1%"),
        (Status::Accidental, "> 0%"),
        (Status::Absent, "0%"),
    ];
    for (status, threshold) in thresholds {
        table.add_row(vec![status_cell(status), Cell::new(threshold)]);
    }
    println!("{table}");
}

fn print_option_list(label: &str, values: &[String]) {
    if values.is_empty() {
        println!("{label}: (none)");
    } else {
        println!("{label}: {}", values.join(", "));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Status cells are colored by category; everything else renders plain.
fn value_cell(value: &str) -> Cell {
    match Status::from_str(value) {
        Ok(status) => status_cell(status),
        Err(_) => Cell::new(value),
    }
}

fn status_cell(status: Status) -> Cell {
    match status {
        Status::Common => Cell::new(status.as_str())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Status::FairlyCommon => Cell::new(status.as_str()).fg(Color::Green),
        Status::Uncommon => Cell::new(status.as_str()).fg(Color::Yellow),
        Status::Rare => Cell::new(status.as_str()).fg(Color::Magenta),
        Status::Accidental => Cell::new(status.as_str()).fg(Color::DarkGrey),
        Status::Absent => dim_cell(status.as_str()),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
