pub mod error;
pub mod grid;
pub mod layout;
pub mod options;
pub mod processing;
pub mod redact;
pub mod role;

pub use error::{DossierError, Result};
pub use grid::{Grid, Row, Sheet, Workbook};
pub use layout::ColumnLayout;
pub use options::{HeaderPolicy, ProcessingOptions};
pub use processing::{DateCounts, RelocationCounts, RowStats, SheetStats, WorkbookStats};
pub use redact::redact_value;
pub use role::LogicalRole;
