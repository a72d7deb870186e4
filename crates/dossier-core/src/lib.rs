//! Record normalization over extracted tables.
//!
//! - **schema**: role to column mapping across column deletion
//! - **row_pipeline**: per-row residual text pipeline over the Name cell
//! - **date_columns**: primary, birth and end-date column stages
//! - **court**: judicial-history relocation and date fixup
//! - **sheet**: the per-sheet orchestrator
//! - **workbook**: multi-sheet driver

pub mod court;
pub mod date_columns;
pub mod row_pipeline;
pub mod schema;
pub mod sheet;
pub mod workbook;

pub use court::{CourtFixup, fixup_court_dates, relocate_court_sources};
pub use date_columns::{DateColumnStages, EndDateOutcome};
pub use row_pipeline::{
    AddressStage, Claim, CourtStage, FieldStage, NameStage, OtherStage, PhoneStage,
    PipelineOutcome, RowFieldPipeline, StageOutput,
};
pub use schema::{RoleColumns, SchemaMap};
pub use sheet::SheetOrchestrator;
pub use workbook::{process_workbook, reprocess_workbook};
