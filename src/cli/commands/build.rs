//! Build command implementation
//!
//! Implements `rsw build` (and bare `rsw`): load the config, resolve every
//! crate, make sure wasm-pack exists, build, link, print the summary.
//! With `--json`, tool output goes to stderr so stdout holds only the
//! summary document.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{
    is_json, is_quiet, print_detail, print_info, print_warning, status, verbosity,
};
use crate::config::defaults::WASM_PACK;
use crate::core::config::ProjectConfig;
use crate::core::pipeline::{self, LinkSummary};
use crate::core::plan::BuildPlan;
use crate::error::RswError;
use crate::infra::process::SystemRunner;
use crate::infra::toolchain::{self, InstallPolicy};

/// Build options
pub struct BuildOptions {
    /// Fail instead of installing wasm-pack
    pub no_install: bool,
}

/// Execute the build command
pub async fn execute(project_dir: &Path, options: BuildOptions) -> Result<()> {
    let config = ProjectConfig::load(project_dir).map_err(RswError::from)?;
    let plan = BuildPlan::new(&config, project_dir)?;

    if verbosity() > 0 {
        print_plan(&plan);
    }

    let mut runner = SystemRunner::new().stdout_to_stderr(is_json());

    let wasm_pack = if plan.is_empty() {
        tracing::debug!("No crates configured, skipping the `{WASM_PACK}` check");
        WASM_PACK.to_string()
    } else {
        let policy = InstallPolicy::from_flags(config.auto_install, options.no_install);
        toolchain::ensure_wasm_pack(
            toolchain::find_wasm_pack,
            policy,
            &config.package_manager,
            &plan.project_dir,
            &mut runner,
        )
        .map_err(RswError::from)?
        .program()
    };

    let summary = pipeline::run(&plan, &wasm_pack, &mut runner)?;

    print_summary(&summary);
    Ok(())
}

fn print_plan(plan: &BuildPlan) {
    print_info(&format!("Building {} crate(s)", plan.units.len()));
    for unit in &plan.units {
        print_detail(&format!(
            "{} → {} (out-name: {})",
            unit.name,
            unit.out_dir.display(),
            unit.package.out_name
        ));
    }
}

fn print_summary(summary: &LinkSummary) {
    if is_json() {
        let json = serde_json::json!({
            "status": "success",
            "linked": summary.entries().iter().map(|(name, path)| serde_json::json!({
                "name": name,
                "path": path.display().to_string(),
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        return;
    }

    if is_quiet() {
        return;
    }

    if summary.is_empty() {
        print_warning("No crates configured in .rswrc.json, nothing to link");
        return;
    }

    println!("\n[rsw::cmd::link]");
    for (name, path) in summary.entries() {
        println!("  {} {name}  {}", status::LINKED, path.display());
    }
}
