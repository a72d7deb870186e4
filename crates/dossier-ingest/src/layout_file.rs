//! Column layout configuration files.

use std::path::Path;

use anyhow::{Context, Result};
use dossier_model::ColumnLayout;

/// Load and validate a JSON column layout.
pub fn load_layout(path: &Path) -> Result<ColumnLayout> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read layout: {}", path.display()))?;
    let layout: ColumnLayout = serde_json::from_str(&text)
        .with_context(|| format!("parse layout: {}", path.display()))?;
    layout
        .validate()
        .with_context(|| format!("invalid layout: {}", path.display()))?;
    Ok(layout)
}

/// Layout from a file when given, the built-in default otherwise.
pub fn resolve_layout(path: Option<&Path>) -> Result<ColumnLayout> {
    match path {
        Some(path) => load_layout(path),
        None => Ok(ColumnLayout::default()),
    }
}

/// Pretty JSON rendering of a layout.
pub fn layout_to_json(layout: &ColumnLayout) -> Result<String> {
    serde_json::to_string_pretty(layout).context("serialize layout")
}
