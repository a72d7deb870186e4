//! Table file discovery.
//!
//! A folder of CSV files is one workbook: each file is a sheet, named after
//! the file stem and ordered by file name.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_csv(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Table files making up the input: the file itself, or every CSV in a folder.
pub fn discover_tables(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        if !is_csv(input) {
            return Err(IngestError::NotCsv {
                path: input.to_path_buf(),
            });
        }
        return Ok(vec![input.to_path_buf()]);
    }
    let files = list_csv_files(input)?;
    if files.is_empty() {
        return Err(IngestError::NoTables {
            path: input.to_path_buf(),
        });
    }
    Ok(files)
}

/// Sheet name for a table file: its stem.
pub fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet".to_string())
}
