use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wrangler_cli::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Events: {} ({} rows)", result.events_path.display(), result.event_rows);
    match &result.output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: (dry run)"),
    }
    match result.dependency_issues {
        Some(0) => println!("Dependency check: clean"),
        Some(count) => println!("Dependency check: {count} issue(s), see warnings"),
        None => println!("Dependency check: skipped"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for summary in &result.tables {
        let file = summary
            .path
            .as_ref()
            .map(|path| Cell::new(path.display()))
            .unwrap_or_else(|| Cell::new("-").add_attribute(Attribute::Dim));
        table.add_row(vec![Cell::new(summary.name), Cell::new(summary.rows), file]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
