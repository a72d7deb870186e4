//! Workbook loading and saving over CSV tables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dossier_model::{Sheet, Workbook};
use tracing::info;

use crate::csv_grid::{read_csv_grid, write_csv_grid};
use crate::discovery::{discover_tables, sheet_name};

/// Load a CSV file or a folder of CSV files as a workbook.
pub fn read_workbook(input: &Path) -> Result<Workbook> {
    let tables = discover_tables(input)
        .with_context(|| format!("discover tables: {}", input.display()))?;
    let mut sheets = Vec::with_capacity(tables.len());
    for path in &tables {
        let grid = read_csv_grid(path)?;
        sheets.push(Sheet::new(sheet_name(path), grid));
    }
    info!(input = %input.display(), sheets = sheets.len(), "loaded workbook");
    Ok(Workbook::new(sheets))
}

/// Write each sheet to `<output_dir>/<sheet>.csv`, creating the folder.
///
/// Returns the written paths in sheet order.
pub fn write_workbook(workbook: &Workbook, output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory: {}", output_dir.display()))?;
    let mut written = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        let path = output_dir.join(format!("{}.csv", sheet.name));
        write_csv_grid(&path, &sheet.grid)?;
        written.push(path);
    }
    info!(output = %output_dir.display(), files = written.len(), "saved workbook");
    Ok(written)
}
