//! Clean logic
//!
//! Removes every resolved crate output directory plus the staging
//! directory, so the next build starts from nothing. Directories outside
//! the project, the project itself and anything holding crate sources are
//! never removed.

use std::path::PathBuf;

use crate::core::plan::BuildPlan;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Result of clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Directories that were removed
    pub removed: Vec<PathBuf>,
    /// Directories that didn't exist (skipped)
    pub skipped: Vec<PathBuf>,
    /// Directories left alone because removing them is unsafe, with the reason
    pub refused: Vec<(PathBuf, String)>,
}

/// Directories a clean would touch, in plan order
pub fn clean_targets(plan: &BuildPlan) -> Vec<PathBuf> {
    plan.units
        .iter()
        .map(|unit| unit.out_dir.clone())
        .chain(plan.staging_dir.clone())
        .collect()
}

/// Remove build outputs for every crate in the plan
pub fn clean_outputs(plan: &BuildPlan) -> Result<CleanResult, FilesystemError> {
    let mut result = CleanResult::default();

    for dir in clean_targets(plan) {
        if let Err(e) = plan.check_removable(&dir) {
            tracing::debug!("Not removing {}: {e}", dir.display());
            result.refused.push((dir, e.to_string()));
            continue;
        }

        if filesystem::remove_dir_all(&dir)? {
            tracing::debug!("Removed {}", dir.display());
            result.removed.push(dir);
        } else {
            result.skipped.push(dir);
        }
    }

    Ok(result)
}
