//! Terminal tables for mappings and import results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prospect_map::TableScan;
use prospect_model::{ImportSummary, ProspectField};

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn styled(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Prints the inferred mapping alongside decoding-quality statistics.
pub fn print_scan(scan: &TableScan, headers: &[String]) {
    let mut table = Table::new();
    styled(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Column")]);
    for field in ProspectField::ALL {
        let bound = scan.mapping.header_for(field);
        let column_cell = match bound {
            Some(header) => Cell::new(header),
            None => Cell::new("-").add_attribute(Attribute::Dim),
        };
        table.add_row(vec![Cell::new(field.label()), column_cell]);
    }
    println!("{table}");

    println!(
        "{} rows, {} with a valid email",
        scan.total_rows, scan.valid_email_rows
    );
    let unmapped = scan.unmapped_headers(headers);
    if !unmapped.is_empty() {
        println!("Unmapped columns: {}", unmapped.join(", "));
    }
}

/// Prints the accumulated import counters plus local row accounting.
pub fn print_import_summary(summary: &ImportSummary, submitted: usize, dropped: usize) {
    let mut table = Table::new();
    styled(&mut table);
    table.set_header(vec![header_cell("Result"), header_cell("Count")]);
    let rows: [(&str, u64); 6] = [
        ("Processed", summary.total_processed),
        ("Inserted", summary.prospects_inserted),
        ("Updated", summary.prospects_updated),
        ("Duplicates in batch", summary.duplicates_in_batch),
        ("Subscriptions added", summary.subscriptions_added),
        ("Added to campaign", summary.campaign_added),
    ];
    for (label, count) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
    println!("Submitted {submitted} prospects; {dropped} rows dropped (no valid email).");
}

/// Prints every canonical field with its known column aliases.
pub fn print_fields() {
    let mut table = Table::new();
    styled(&mut table);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Recognized columns"),
    ]);
    for (field, aliases) in prospect_map::COLUMN_ALIASES {
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(field.label()),
            Cell::new(aliases.join(", ")),
        ]);
    }
    println!("{table}");
}
