use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dossier_cli::types::RunResult;
use dossier_model::SheetStats;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Touched"),
        header_cell("Header"),
        header_cell("Cols deleted"),
        header_cell("Dates"),
        header_cell("Name splits"),
        header_cell("Relocations"),
        header_cell("Court fixed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 3, CellAlignment::Center);
    for sheet in &result.stats.sheets {
        table.add_row(sheet_row(Cell::new(&sheet.sheet), sheet));
    }
    let totals = result.stats.totals();
    let total_label = Cell::new("TOTAL")
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold);
    table.add_row(
        sheet_row(total_label, &totals)
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    println!("{table}");
    print_breakdown(&totals);
}

fn sheet_row(label: Cell, stats: &SheetStats) -> Vec<Cell> {
    vec![
        label,
        Cell::new(stats.rows),
        count_cell(stats.rows_touched, Color::Green),
        flag_cell(stats.header_row_removed),
        count_cell(stats.columns_deleted, Color::Yellow),
        count_cell(stats.dates_normalized.total(), Color::Green),
        count_cell(stats.name_splits, Color::Green),
        count_cell(stats.relocations.total(), Color::Green),
        count_cell(stats.court_cells_reformatted, Color::Green),
    ]
}

/// Per-field totals, only printed when anything changed.
fn print_breakdown(totals: &SheetStats) {
    if !totals.has_changes() {
        println!("No changes.");
        return;
    }
    let dates = totals.dates_normalized;
    let moved = totals.relocations;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Dates"), header_cell("Moved in")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let fields = [
        ("primary date", Some(dates.primary), None),
        ("birth date", Some(dates.birth), None),
        ("end date", Some(dates.end), None),
        ("end date note", None, Some(moved.end_date_note)),
        ("court info", Some(dates.court), Some(moved.court_info)),
        ("name", None, Some(moved.name)),
        ("patronymic", None, Some(moved.patronymic)),
        ("address", None, Some(moved.address)),
        ("phone", None, Some(moved.phone)),
        ("other", None, Some(moved.other)),
    ];
    for (field, date_count, moved_count) in fields {
        table.add_row(vec![
            Cell::new(field),
            optional_count_cell(date_count),
            optional_count_cell(moved_count),
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn optional_count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => count_cell(value, Color::Green),
        None => dim_cell("-"),
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
