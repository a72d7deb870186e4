//! CSV grid reading and writing.
//!
//! Files have no header row of their own; every record is a grid row. Ragged
//! records are accepted and blank cells read as absent.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use dossier_model::{Grid, Row};
use tracing::debug;

fn normalize_cell(raw: &str) -> Option<String> {
    let value = raw.trim_matches('\u{feff}');
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Read a CSV file into a grid.
pub fn read_csv_grid(path: &Path) -> Result<Grid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut grid = Grid::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        grid.push_row(Row::from_cells(record.iter().map(normalize_cell).collect()));
    }
    debug!(
        path = %path.display(),
        rows = grid.row_count(),
        columns = grid.column_count(),
        "read grid"
    );
    Ok(grid)
}

/// Write a grid as a rectangular CSV file, absent cells as empty fields.
pub fn write_csv_grid(path: &Path, grid: &Grid) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    for row in grid.to_text_rows() {
        writer
            .write_record(&row)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}
