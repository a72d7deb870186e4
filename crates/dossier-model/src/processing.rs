//! Processing statistics.
//!
//! These records are the only structured result surfaced to callers. Every
//! counter tracks a real rewrite, so re-running over settled output reports
//! zero changes.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Dates rewritten to `DD.MM.YYYY`, by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCounts {
    pub primary: usize,
    pub birth: usize,
    pub end: usize,
    pub court: usize,
}

impl DateCounts {
    pub fn total(&self) -> usize {
        self.primary + self.birth + self.end + self.court
    }
}

impl AddAssign for DateCounts {
    fn add_assign(&mut self, other: Self) {
        self.primary += other.primary;
        self.birth += other.birth;
        self.end += other.end;
        self.court += other.court;
    }
}

/// Values moved into each target field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationCounts {
    pub court_info: usize,
    pub end_date_note: usize,
    pub patronymic: usize,
    pub address: usize,
    pub phone: usize,
    pub name: usize,
    pub other: usize,
}

impl RelocationCounts {
    pub fn total(&self) -> usize {
        self.court_info
            + self.end_date_note
            + self.patronymic
            + self.address
            + self.phone
            + self.name
            + self.other
    }
}

impl AddAssign for RelocationCounts {
    fn add_assign(&mut self, other: Self) {
        self.court_info += other.court_info;
        self.end_date_note += other.end_date_note;
        self.patronymic += other.patronymic;
        self.address += other.address;
        self.phone += other.phone;
        self.name += other.name;
        self.other += other.other;
    }
}

/// Per-row counters, folded into [`SheetStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStats {
    pub dates_normalized: DateCounts,
    pub name_splits: usize,
    pub relocations: RelocationCounts,
}

impl AddAssign for RowStats {
    fn add_assign(&mut self, other: Self) {
        self.dates_normalized += other.dates_normalized;
        self.name_splits += other.name_splits;
        self.relocations += other.relocations;
    }
}

/// Result of processing one sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetStats {
    pub sheet: String,
    /// Rows left after header removal.
    pub rows: usize,
    /// Rows with at least one changed cell.
    pub rows_touched: usize,
    pub header_row_removed: bool,
    pub columns_deleted: usize,
    pub dates_normalized: DateCounts,
    pub name_splits: usize,
    pub relocations: RelocationCounts,
    /// Judicial-history cells whose embedded dates were rewritten.
    pub court_cells_reformatted: usize,
}

impl SheetStats {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            ..Self::default()
        }
    }

    pub fn absorb_row(&mut self, row: RowStats) {
        self.dates_normalized += row.dates_normalized;
        self.name_splits += row.name_splits;
        self.relocations += row.relocations;
    }

    pub fn has_changes(&self) -> bool {
        self.rows_touched > 0 || self.header_row_removed || self.columns_deleted > 0
    }
}

/// Result of processing every sheet of a workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookStats {
    pub sheets: Vec<SheetStats>,
}

impl WorkbookStats {
    pub fn sheets_processed(&self) -> usize {
        self.sheets.len()
    }

    /// Sum of every sheet's counters under the sheet name `"TOTAL"`.
    pub fn totals(&self) -> SheetStats {
        let mut total = SheetStats::new("TOTAL");
        for sheet in &self.sheets {
            total.rows += sheet.rows;
            total.rows_touched += sheet.rows_touched;
            total.header_row_removed |= sheet.header_row_removed;
            total.columns_deleted += sheet.columns_deleted;
            total.dates_normalized += sheet.dates_normalized;
            total.name_splits += sheet.name_splits;
            total.relocations += sheet.relocations;
            total.court_cells_reformatted += sheet.court_cells_reformatted;
        }
        total
    }

    pub fn header_rows_removed(&self) -> usize {
        self.sheets
            .iter()
            .filter(|sheet| sheet.header_row_removed)
            .count()
    }
}
