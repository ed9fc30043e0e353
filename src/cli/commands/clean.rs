//! CLI implementation for `rsw clean`
//!
//! Removes the output directory of every configured crate and the staging
//! directory.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{is_json, print_detail, print_success, print_warning};
use crate::core::clean::clean_outputs;
use crate::core::config::ProjectConfig;
use crate::core::plan::BuildPlan;
use crate::error::RswError;

/// Execute the clean command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let config = ProjectConfig::load(project_dir).map_err(RswError::from)?;
    let plan = BuildPlan::new(&config, project_dir)?;

    let result = clean_outputs(&plan)
        .map_err(RswError::from)
        .context("Failed to clean build outputs")?;

    if is_json() {
        let json = serde_json::json!({
            "status": "success",
            "removed": result.removed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "skipped": result.skipped.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "refused": result.refused.iter().map(|(path, reason)| serde_json::json!({
                "path": path.display().to_string(),
                "reason": reason,
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        return Ok(());
    }

    for (_, reason) in &result.refused {
        print_warning(reason);
    }

    if result.removed.is_empty() {
        print_success("Nothing to clean");
    } else {
        print_success("Cleaned build outputs:");
        for dir in &result.removed {
            print_detail(&format!("Removed {}", dir.display()));
        }
    }

    Ok(())
}
