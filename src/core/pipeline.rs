//! Build and link pipeline
//!
//! Runs a [`BuildPlan`]: optional unlink and staging clear, one wasm-pack
//! build per crate, then a single batched link. The first failing build
//! stops the run and the link step never happens.

use std::path::{Path, PathBuf};

use crate::core::plan::BuildPlan;
use crate::error::{PathError, RswError, ToolError};
use crate::infra::filesystem;
use crate::infra::process::ToolRunner;

/// Crates that were built and linked, in build order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    entries: Vec<(String, PathBuf)>,
}

impl LinkSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a built crate
    pub fn record(&mut self, name: &str, out_dir: &Path) {
        self.entries.push((name.to_string(), out_dir.to_path_buf()));
    }

    /// `(name, out dir)` pairs in build order
    pub fn entries(&self) -> &[(String, PathBuf)] {
        &self.entries
    }

    /// Output directories in build order
    pub fn out_dirs(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(_, dir)| dir.as_path())
    }

    /// Number of linked crates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was built
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the plan with wasm-pack at `wasm_pack`
pub fn run<R>(plan: &BuildPlan, wasm_pack: &str, runner: &mut R) -> Result<LinkSummary, RswError>
where
    R: ToolRunner + ?Sized,
{
    if plan.unlink && !plan.is_empty() {
        unlink_previous(plan, runner)?;
    }

    if let Some(staging) = &plan.staging_dir {
        if filesystem::remove_dir_all(staging)? {
            tracing::info!("Cleared staging directory {}", staging.display());
        }
    }

    let mut summary = LinkSummary::new();

    for unit in &plan.units {
        if !unit.source_dir.is_dir() {
            return Err(PathError::MissingSourceDir {
                unit: unit.name.clone(),
                path: unit.source_dir.clone(),
            }
            .into());
        }

        let invocation = unit.build_invocation(wasm_pack);
        tracing::debug!("[wasm-pack build]({}) {}", unit.name, invocation.args.join(" "));
        tracing::debug!("[wasm-pack cwd]({}) {}", unit.name, invocation.cwd.display());

        let status = runner.run(&invocation)?;
        if !status.success() {
            tracing::debug!("[wasm-pack build error]({}) {}", unit.name, status);
            return Err(ToolError::BuildFailed {
                unit: unit.name.clone(),
                status: status.to_string(),
            }
            .into());
        }

        tracing::debug!(
            "[wasm-pack build success]({}) {}",
            unit.name,
            unit.out_dir.display()
        );
        summary.record(&unit.name, &unit.out_dir);
    }

    if summary.is_empty() {
        tracing::info!("No crates configured, skipping link");
        return Ok(summary);
    }

    let link = plan.link_invocation(summary.out_dirs());
    tracing::debug!("[link] {link}");
    let status = runner.run(&link)?;
    if !status.success() {
        return Err(ToolError::LinkFailed {
            package_manager: plan.package_manager.clone(),
            status: status.to_string(),
        }
        .into());
    }

    Ok(summary)
}

/// A failed unlink is not fatal: the packages may never have been linked
fn unlink_previous<R>(plan: &BuildPlan, runner: &mut R) -> Result<(), RswError>
where
    R: ToolRunner + ?Sized,
{
    let unlink = plan.unlink_invocation();
    tracing::debug!("[unlink] {unlink}");
    let status = runner.run(&unlink)?;
    if !status.success() {
        tracing::warn!("`{unlink}` failed ({status}), continuing");
    }
    Ok(())
}
