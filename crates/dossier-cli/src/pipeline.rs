//! Run pipeline with explicit stages.
//!
//! 1. **Layout**: load the column layout (file or default)
//! 2. **Ingest**: read the input table or folder as a workbook
//! 3. **Normalize**: process every sheet
//! 4. **Output**: write one CSV per sheet to the output folder

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use dossier_core::{process_workbook, reprocess_workbook};
use dossier_ingest::{read_workbook, resolve_layout, write_workbook};
use dossier_model::ProcessingOptions;
use tracing::{info, info_span};

use crate::types::RunResult;

/// Folder name used when no output directory is given.
pub const DEFAULT_OUTPUT_FOLDER: &str = "normalized";

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub layout: Option<PathBuf>,
    pub options: ProcessingOptions,
    /// Input is already processed output.
    pub settled: bool,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            layout: None,
            options: ProcessingOptions::default(),
            settled: false,
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_layout(mut self, path: impl Into<PathBuf>) -> Self {
        self.layout = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ProcessingOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_settled(mut self, settled: bool) -> Self {
        self.settled = settled;
        self
    }

    /// Output folder: explicit, or `normalized/` next to the input tables.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        default_output_dir(&self.input)
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    let base = if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or_else(|| Path::new("."))
    };
    base.join(DEFAULT_OUTPUT_FOLDER)
}

/// Load, normalize and write a workbook.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!("run", input = %config.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let layout = resolve_layout(config.layout.as_deref()).context("load column layout")?;
    let mut workbook = read_workbook(&config.input)?;

    let stats = if config.settled {
        reprocess_workbook(&mut workbook, &layout, &config.options)
    } else {
        process_workbook(&mut workbook, &layout, &config.options)
    }
    .context("normalize workbook")?;

    let output_dir = config.resolved_output_dir();
    let written = write_workbook(&workbook, &output_dir)?;
    info!(
        sheets = stats.sheets_processed(),
        files = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        input: config.input.clone(),
        output_dir,
        written,
        stats,
    })
}
