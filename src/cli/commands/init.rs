//! CLI implementation for `rsw init`
//!
//! Writes a starter `.rswrc.json` in the current directory.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{is_json, print_detail, print_success};
use crate::core::init::init_project;
use crate::error::RswError;

/// Execute the init command
pub async fn execute(project_dir: &Path, force: bool) -> Result<()> {
    let path = init_project(project_dir, force).map_err(RswError::from)?;

    if is_json() {
        let json = serde_json::json!({
            "status": "success",
            "config": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        return Ok(());
    }

    print_success(&format!("Created {}", path.display()));
    print_detail("Add your crates to the `crates` list, then run `rsw`.");
    Ok(())
}
