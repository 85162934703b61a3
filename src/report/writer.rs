use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::records::Report;

/// Serialize the report and overwrite the snapshot file
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Saved report to {}", path.display());
    Ok(())
}
