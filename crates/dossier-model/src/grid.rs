//! Row/column addressable text grid.
//!
//! Rows and columns are 1-based, matching the spreadsheet convention of the
//! tables the grid is extracted from. A cell holds an optional string; an
//! empty (or whitespace-only) string and a missing value are both "no
//! content" and read back as `None`.

use serde::{Deserialize, Serialize};

use crate::error::{DossierError, Result};

/// One table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Cell content at a 1-based column, `None` when blank or absent.
    pub fn get(&self, column: usize) -> Option<&str> {
        if column == 0 {
            return None;
        }
        self.cells
            .get(column - 1)
            .and_then(Option::as_deref)
            .filter(|value| !value.trim().is_empty())
    }

    /// Set a cell, growing the row when the column lies past its end.
    ///
    /// Column 0 does not exist and is ignored.
    pub fn set(&mut self, column: usize, value: Option<String>) {
        if column == 0 {
            return;
        }
        let value = value.filter(|text| !text.trim().is_empty());
        if column > self.cells.len() {
            if value.is_none() {
                return;
            }
            self.cells.resize(column, None);
        }
        self.cells[column - 1] = value;
    }

    /// Physically delete a column, shifting later columns down by one.
    pub fn remove_column(&mut self, column: usize) {
        if column >= 1 && column <= self.cells.len() {
            self.cells.remove(column - 1);
        }
    }

    /// Number of stored cells (including trailing absent ones).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| {
            cell.as_deref()
                .is_none_or(|value| value.trim().is_empty())
        })
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }
}

/// A table extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a grid from raw text rows; empty strings become absent cells.
    pub fn from_text_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                let cells = row
                    .into_iter()
                    .map(|value| {
                        let value: String = value.into();
                        if value.trim().is_empty() {
                            None
                        } else {
                            Some(value)
                        }
                    })
                    .collect();
                Row::from_cells(cells)
            })
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.row(row).and_then(|r| r.get(column))
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        row.checked_sub(1).and_then(|idx| self.rows.get(idx))
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut Row> {
        row.checked_sub(1).and_then(|idx| self.rows.get_mut(idx))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Delete one column from every row.
    pub fn delete_column(&mut self, column: usize) -> Result<()> {
        if column == 0 {
            return Err(DossierError::ColumnOutOfRange(column));
        }
        for row in &mut self.rows {
            row.remove_column(column);
        }
        Ok(())
    }

    /// Delete one row, shifting later rows up.
    pub fn delete_row(&mut self, row: usize) -> Result<Row> {
        let rows = self.rows.len();
        if row == 0 || row > rows {
            return Err(DossierError::RowOutOfRange { row, rows });
        }
        Ok(self.rows.remove(row - 1))
    }

    /// Render as rectangular text rows, absent cells as empty strings.
    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        let width = self.column_count();
        self.rows
            .iter()
            .map(|row| {
                (1..=width)
                    .map(|column| row.get(column).unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }
}

/// A named grid, one per extracted table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub grid: Grid,
}

impl Sheet {
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

/// All tables of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_read_as_absent() {
        let grid = Grid::from_text_rows(vec![vec!["a", "", "  "]]);
        assert_eq!(grid.cell(1, 1), Some("a"));
        assert_eq!(grid.cell(1, 2), None);
        assert_eq!(grid.cell(1, 3), None);
        assert_eq!(grid.cell(1, 4), None);
        assert_eq!(grid.cell(0, 1), None);
    }

    #[test]
    fn set_grows_row() {
        let mut row = Row::new();
        row.set(3, Some("x".to_string()));
        assert_eq!(row.len(), 3);
        assert_eq!(row.get(3), Some("x"));
        row.set(5, None);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn delete_column_shifts_left() {
        let mut grid = Grid::from_text_rows(vec![vec!["a", "b", "c", "d"]]);
        grid.delete_column(3).unwrap();
        grid.delete_column(1).unwrap();
        assert_eq!(grid.to_text_rows(), vec![vec!["b", "d"]]);
        assert!(grid.delete_column(0).is_err());
    }

    #[test]
    fn delete_row_out_of_range() {
        let mut grid = Grid::from_text_rows(vec![vec!["a"]]);
        assert!(matches!(
            grid.delete_row(2),
            Err(DossierError::RowOutOfRange { row: 2, rows: 1 })
        ));
        assert!(grid.delete_row(1).is_ok());
        assert!(grid.is_empty());
    }
}
