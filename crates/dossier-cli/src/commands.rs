use anyhow::{Context, Result};
use dossier_cli::pipeline::{RunConfig, run};
use dossier_cli::types::RunResult;
use dossier_ingest::{layout_to_json, resolve_layout};
use dossier_model::{HeaderPolicy, ProcessingOptions};

use crate::cli::{LayoutArgs, RunArgs};

pub fn run_normalize(args: &RunArgs) -> Result<RunResult> {
    let mut options = ProcessingOptions::new();
    if args.keep_header {
        options = options.with_header_policy(HeaderPolicy::Keep);
    }
    if let Some(year) = args.reference_year {
        options = options.with_reference_year(year);
    }
    let mut config = RunConfig::new(&args.input)
        .with_options(options)
        .with_settled(args.settled);
    if let Some(dir) = &args.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(layout) = &args.layout {
        config = config.with_layout(layout);
    }
    run(&config)
}

pub fn run_layout(args: &LayoutArgs) -> Result<()> {
    let layout = resolve_layout(args.layout.as_deref())?;
    let layout = if args.settled {
        layout.settled()
    } else {
        layout
    };
    println!("{}", layout_to_json(&layout)?);
    Ok(())
}

pub fn print_json(result: &RunResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize run result")?;
    println!("{json}");
    Ok(())
}
