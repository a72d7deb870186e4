use std::path::PathBuf;

use dossier_model::WorkbookStats;
use serde::Serialize;

/// Outcome of one `dossier run`.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Written tables, in sheet order.
    pub written: Vec<PathBuf>,
    pub stats: WorkbookStats,
}
