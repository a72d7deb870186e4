//! Tests for whole-sheet and workbook processing.

use dossier_core::{SheetOrchestrator, process_workbook, reprocess_workbook};
use dossier_model::{ColumnLayout, Grid, LogicalRole, ProcessingOptions, Sheet, Workbook};

// ============================================================================
// Fixtures
// ============================================================================

fn options() -> ProcessingOptions {
    ProcessingOptions::new().with_reference_year(2024)
}

/// A row of the extracted table, 19 source columns wide.
fn source_row(cells: &[(usize, &str)]) -> Vec<String> {
    let mut row = vec![String::new(); 19];
    for (column, value) in cells {
        row[column - 1] = (*value).to_string();
    }
    row
}

fn extracted_workbook() -> Workbook {
    let grid = Grid::from_text_rows(vec![
        source_row(&[(1, "№"), (2, "Дата"), (4, "ФИО"), (5, "Дата рождения")]),
        source_row(&[
            (1, "1"),
            (2, "13. 05. 2024"),
            (3, "x"),
            (4, "ЖумановИсабекМаратбекович Тестов 8 (921) 555-12-34"),
            (5, "1.2.90 г.р."),
            (6, "осужденный 12 . 03 . 2021 Кировским р/с по ст. 158"),
            (7, "характеризуется положительно"),
            (8, "14.07.2023 14.08.2024"),
        ]),
        source_row(&[
            (1, "2"),
            (2, "5/6/23"),
            (4, "Петрова Анна 123-45-67 без регистрации"),
            (8, "условно"),
            (11, "ранее судима"),
        ]),
    ]);
    Workbook::new(vec![Sheet::new("Таблица_1", grid)])
}

/// Non-empty cells only, one line per row.
fn render(grid: &Grid) -> String {
    grid.rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let cells: Vec<String> = (1..=row.len())
                .filter_map(|column| row.get(column).map(|value| format!("c{column}={value}")))
                .collect();
            format!("{}: {}", index + 1, cells.join("; "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Processing
// ============================================================================

#[test]
fn processes_extracted_sheet() {
    let mut workbook = extracted_workbook();
    let stats = process_workbook(&mut workbook, &ColumnLayout::default(), &options())
        .expect("process workbook");

    insta::assert_snapshot!(render(&workbook.sheets[0].grid), @r"
    1: c1=13.05.2024; c2=Жуманов Исабек Маратбекович; c3=01.02.1990; c5=характеризуется положительно; c6=14.08.2024; c9=осужденный 12.03.2021 Кировским р/с по ст. 158; c16=8 (921) 555-12-34; c17=Тестов
    2: c1=05.06.2023; c2=Петрова Анна; c8=условно; c9=ранее судима; c16=123-45-67; c17=без регистрации
    ");

    let sheet = &stats.sheets[0];
    assert_eq!(sheet.sheet, "Таблица_1");
    assert!(sheet.header_row_removed);
    assert_eq!(sheet.columns_deleted, 2);
    assert_eq!(sheet.rows, 2);
    assert_eq!(sheet.rows_touched, 2);
    assert_eq!(sheet.dates_normalized.primary, 2);
    assert_eq!(sheet.dates_normalized.birth, 1);
    assert_eq!(sheet.dates_normalized.end, 1);
    assert_eq!(sheet.dates_normalized.court, 1);
    assert_eq!(sheet.court_cells_reformatted, 1);
    assert_eq!(sheet.name_splits, 1);
    assert_eq!(sheet.relocations.court_info, 1);
    assert_eq!(sheet.relocations.end_date_note, 1);
    assert_eq!(sheet.relocations.phone, 2);
    assert_eq!(sheet.relocations.other, 2);
    assert_eq!(sheet.relocations.name, 2);
    assert_eq!(sheet.relocations.address, 0);
}

#[test]
fn second_run_is_a_no_op() {
    let mut workbook = extracted_workbook();
    let layout = ColumnLayout::default();
    process_workbook(&mut workbook, &layout, &options()).expect("first pass");
    let once = workbook.clone();

    let stats = reprocess_workbook(&mut workbook, &layout, &options()).expect("second pass");
    assert_eq!(workbook, once);
    let totals = stats.totals();
    assert!(!totals.has_changes());
    assert_eq!(totals.dates_normalized.total(), 0);
    assert_eq!(totals.relocations.total(), 0);
    assert_eq!(totals.name_splits, 0);
    assert_eq!(totals.court_cells_reformatted, 0);
}

#[test]
fn court_text_in_name_cell_is_claimed_whole() {
    let layout = ColumnLayout::default().settled();
    let orchestrator = SheetOrchestrator::new(layout, options().settled()).expect("orchestrator");
    let name_column = 2;
    let court_column = 9;
    let mut row = vec![String::new(); 17];
    row[0] = "01.01.2024".to_string();
    row[name_column - 1] = "Сидоров постановлением суда от 1. 2. 2023".to_string();
    let mut sheet = Sheet::new("s", Grid::from_text_rows(vec![row]));

    let stats = orchestrator.process(&mut sheet).expect("process");
    assert_eq!(sheet.grid.cell(1, name_column), None);
    assert_eq!(
        sheet.grid.cell(1, court_column),
        Some("Сидоров постановлением суда от 01.02.2023")
    );
    assert_eq!(stats.relocations.court_info, 1);
    assert_eq!(stats.dates_normalized.court, 1);
}

#[test]
fn address_and_stray_patronymic_leave_name_cell() {
    let layout = ColumnLayout::default().settled();
    let orchestrator = SheetOrchestrator::new(layout, options().settled()).expect("orchestrator");
    let (name_column, patronymic_column, address_column, other_column) = (2, 14, 15, 17);
    let mut row = vec![String::new(); 17];
    row[0] = "01.01.2024".to_string();
    row[name_column - 1] = "Иванов Иван Сергеевич Петрович г. СПб".to_string();
    let mut sheet = Sheet::new("s", Grid::from_text_rows(vec![row]));

    let stats = orchestrator.process(&mut sheet).expect("process");
    assert_eq!(sheet.grid.cell(1, address_column), Some("Иванов Иван Сергеевич"));
    assert_eq!(sheet.grid.cell(1, patronymic_column), Some("Петрович"));
    assert_eq!(sheet.grid.cell(1, other_column), Some("г. СПб"));
    assert_eq!(sheet.grid.cell(1, name_column), None);
    assert_eq!(stats.relocations.address, 1);
    assert_eq!(stats.relocations.patronymic, 1);
}

#[test]
fn invalid_layout_aborts_before_any_change() {
    let mut workbook = extracted_workbook();
    let before = workbook.clone();
    let layout = ColumnLayout::default().with_role(LogicalRole::Phone, 1);
    assert!(process_workbook(&mut workbook, &layout, &options()).is_err());
    assert_eq!(workbook, before);
}
