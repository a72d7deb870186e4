//! Whole-sheet processing.
//!
//! A sheet moves through three phases, each in its own tracing span:
//!
//! 1. `column_remap` - header detection, column deletion, header removal
//! 2. `row_pass` - date columns, court-source relocation, row field pipeline
//! 3. `court_date_fixup` - dates inside the judicial-history column
//!
//! The schema is fixed before the first row is touched and never changes
//! during the row pass.

use dossier_model::{
    ColumnLayout, Grid, HeaderPolicy, LogicalRole, ProcessingOptions, Result, Row, RowStats, Sheet,
    SheetStats,
};
use dossier_transform::classify::CourtInfoClassifier;
use dossier_transform::normalization::{DateNormalizer, looks_like_date};
use tracing::{debug, info, info_span};

use crate::court::{fixup_court_dates, relocate_court_sources};
use crate::date_columns::DateColumnStages;
use crate::row_pipeline::RowFieldPipeline;
use crate::schema::{RoleColumns, SchemaMap};

/// Drives one sheet through column remap, row pass and court date fixup.
pub struct SheetOrchestrator {
    layout: ColumnLayout,
    options: ProcessingOptions,
    dates: DateColumnStages,
    court: CourtInfoClassifier,
    pipeline: RowFieldPipeline,
}

impl SheetOrchestrator {
    /// Build an orchestrator, rejecting an invalid layout up front.
    pub fn new(layout: ColumnLayout, options: ProcessingOptions) -> Result<Self> {
        layout.validate()?;
        let normalizer = DateNormalizer::with_reference(options.reference_year);
        Ok(Self {
            layout,
            options,
            dates: DateColumnStages::new(normalizer),
            court: CourtInfoClassifier::default(),
            pipeline: RowFieldPipeline::default(),
        })
    }

    /// Process a sheet in place.
    pub fn process(&self, sheet: &mut Sheet) -> Result<SheetStats> {
        let span = info_span!("sheet", name = %sheet.name);
        let _guard = span.enter();
        let mut stats = SheetStats::new(sheet.name.clone());

        let schema = {
            let _remap = info_span!("column_remap").entered();
            let schema = SchemaMap::derive(&self.layout)?;
            let header = self.is_header_row(&sheet.grid, &schema);
            stats.columns_deleted = schema.apply_deletions(&mut sheet.grid)?;
            if header {
                sheet.grid.delete_row(1)?;
                stats.header_row_removed = true;
                debug!("removed header row");
            }
            schema
        };

        {
            let _rows = info_span!("row_pass").entered();
            let columns = schema.columns();
            for row in sheet.grid.rows_mut() {
                let before = row.clone();
                let row_stats = self.process_row(row, &columns, schema.court_sources());
                stats.absorb_row(row_stats);
                if !same_content(&before, row) {
                    stats.rows_touched += 1;
                }
            }
        }

        {
            let _fixup = info_span!("court_date_fixup").entered();
            let column = schema.index(LogicalRole::CourtInfo);
            let fixup = fixup_court_dates(&mut sheet.grid, column, &self.dates.finder());
            stats.court_cells_reformatted = fixup.cells_reformatted;
            stats.dates_normalized.court = fixup.dates_normalized;
        }

        stats.rows = sheet.grid.row_count();
        info!(
            rows = stats.rows,
            touched = stats.rows_touched,
            header_removed = stats.header_row_removed,
            "sheet processed"
        );
        Ok(stats)
    }

    fn is_header_row(&self, grid: &Grid, schema: &SchemaMap) -> bool {
        if self.options.header_policy == HeaderPolicy::Keep || grid.is_empty() {
            return false;
        }
        let first = schema
            .source_index(LogicalRole::PrimaryDate)
            .and_then(|column| grid.cell(1, column));
        !first.is_some_and(looks_like_date)
    }

    fn process_row(&self, row: &mut Row, columns: &RoleColumns, court_sources: &[usize]) -> RowStats {
        let mut stats = RowStats::default();
        if self.dates.normalize_primary(row, columns.primary_date) {
            stats.dates_normalized.primary += 1;
        }
        if self.dates.normalize_birth(row, columns.birth_date) {
            stats.dates_normalized.birth += 1;
        }
        let end = self
            .dates
            .process_end_date(row, columns.end_date, columns.end_date_note);
        if end.date_normalized {
            stats.dates_normalized.end += 1;
        }
        if end.text_relocated {
            stats.relocations.end_date_note += 1;
        }
        stats.relocations.court_info +=
            relocate_court_sources(row, court_sources, columns.court_info, &self.court);
        stats += self.pipeline.apply_to_row(row, columns);
        stats
    }
}

/// Whether two rows read the same in every column.
fn same_content(before: &Row, after: &Row) -> bool {
    let width = before.len().max(after.len());
    (1..=width).all(|column| before.get(column) == after.get(column))
}
