//! Workbook driver.

use dossier_model::{ColumnLayout, ProcessingOptions, Result, Workbook, WorkbookStats};
use tracing::info;

use crate::sheet::SheetOrchestrator;

/// Process every sheet of a workbook in order.
///
/// Sheets are independent; the first failing sheet aborts the whole pass and
/// the caller should discard the workbook.
pub fn process_workbook(
    workbook: &mut Workbook,
    layout: &ColumnLayout,
    options: &ProcessingOptions,
) -> Result<WorkbookStats> {
    let orchestrator = SheetOrchestrator::new(layout.clone(), options.clone())?;
    let mut stats = WorkbookStats::default();
    for sheet in &mut workbook.sheets {
        stats.sheets.push(orchestrator.process(sheet)?);
    }
    let totals = stats.totals();
    info!(
        sheets = stats.sheets_processed(),
        rows = totals.rows,
        touched = totals.rows_touched,
        "workbook processed"
    );
    Ok(stats)
}

/// Re-run over already processed output.
///
/// Uses the settled layout and keeps every row, so a correct first pass
/// makes this a no-op.
pub fn reprocess_workbook(
    workbook: &mut Workbook,
    layout: &ColumnLayout,
    options: &ProcessingOptions,
) -> Result<WorkbookStats> {
    process_workbook(workbook, &layout.settled(), &options.settled())
}
