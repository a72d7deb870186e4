use thiserror::Error;

use crate::role::LogicalRole;

#[derive(Debug, Error)]
pub enum DossierError {
    #[error("invalid column layout: {0}")]
    InvalidLayout(String),
    #[error("logical role {0} is not mapped to a surviving column")]
    UnmappedRole(LogicalRole),
    #[error("row {row} is out of range (grid has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("column {0} is out of range (columns are 1-based)")]
    ColumnOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, DossierError>;
