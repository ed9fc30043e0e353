//! Build plan construction
//!
//! Resolves every configured crate up front so that a bad name, an absolute
//! `outDir` or an escaping `root` stops the run before any tool is spawned.

use std::path::{Path, PathBuf};

use crate::config::defaults::WASM_PACK_TARGET;
use crate::core::config::ProjectConfig;
use crate::core::naming::PackageName;
use crate::core::resolver::PathResolver;
use crate::error::{PathError, RswError};
use crate::infra::process::Invocation;

/// One crate, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUnit {
    /// Crate name as configured
    pub name: String,
    /// Derived `--out-name` and `--scope`
    pub package: PackageName,
    /// Working directory for wasm-pack
    pub source_dir: PathBuf,
    /// Absolute `--out-dir`
    pub out_dir: PathBuf,
}

impl PlannedUnit {
    /// wasm-pack arguments for this crate
    pub fn build_args(&self) -> Vec<String> {
        let mut args: Vec<String> = ["build", "--release", "--target", WASM_PACK_TARGET]
            .into_iter()
            .map(String::from)
            .collect();

        args.push("--out-name".to_string());
        args.push(self.package.out_name.clone());

        if let Some(scope) = &self.package.scope {
            args.push("--scope".to_string());
            args.push(scope.clone());
        }

        args.push("--out-dir".to_string());
        args.push(self.out_dir.to_string_lossy().into_owned());
        args
    }

    /// wasm-pack invocation for this crate
    pub fn build_invocation(&self, wasm_pack: &str) -> Invocation {
        Invocation::new(wasm_pack, &self.source_dir).args(self.build_args())
    }
}

/// Everything a run will do, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Working directory of the run
    pub project_dir: PathBuf,
    /// Crates in config order
    pub units: Vec<PlannedUnit>,
    /// Unlink previously linked packages before building
    pub unlink: bool,
    /// Directory cleared before building
    pub staging_dir: Option<PathBuf>,
    /// Program used for link and unlink
    pub package_manager: String,
}

impl BuildPlan {
    /// Resolve every crate in the config against the project directory
    pub fn new(config: &ProjectConfig, project_dir: &Path) -> Result<Self, RswError> {
        let resolver = PathResolver::new(project_dir, &config.root);

        let units = config
            .units
            .iter()
            .map(|unit| -> Result<PlannedUnit, RswError> {
                let package = PackageName::derive(&unit.name)?;
                let source_dir = resolver.unit_dir(&unit.name)?;
                let out_dir = resolver.out_dir(unit)?;
                Ok(PlannedUnit {
                    name: unit.name.clone(),
                    package,
                    source_dir,
                    out_dir,
                })
            })
            .collect::<Result<Vec<_>, RswError>>()?;

        let staging_dir = config
            .staging_dir
            .as_deref()
            .map(|dir| resolver.staging_dir(dir))
            .transpose()?;

        let plan = Self {
            project_dir: resolver.project_dir().to_path_buf(),
            units,
            unlink: config.unlink,
            staging_dir,
            package_manager: config.package_manager.clone(),
        };

        if let Some(staging) = &plan.staging_dir {
            plan.check_removable(staging)?;
        }

        Ok(plan)
    }

    /// Whether there is nothing to build
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Whether `dir` may be deleted recursively
    ///
    /// Only directories strictly inside the project that neither are nor
    /// contain a crate source directory qualify.
    pub fn check_removable(&self, dir: &Path) -> Result<(), PathError> {
        if dir == self.project_dir || !dir.starts_with(&self.project_dir) {
            return Err(PathError::Unremovable {
                path: dir.to_path_buf(),
                reason: format!(
                    "not strictly inside the project directory '{}'",
                    self.project_dir.display()
                ),
            });
        }

        if let Some(unit) = self.units.iter().find(|u| u.source_dir.starts_with(dir)) {
            return Err(PathError::Unremovable {
                path: dir.to_path_buf(),
                reason: format!("it holds the sources of crate '{}'", unit.name),
            });
        }

        Ok(())
    }

    /// `<pm> unlink -g <names...>`
    pub fn unlink_invocation(&self) -> Invocation {
        Invocation::new(&self.package_manager, &self.project_dir)
            .args(["unlink", "-g"])
            .args(self.units.iter().map(|u| u.name.clone()))
    }

    /// `<pm> link <out dirs...>` for the given output directories
    pub fn link_invocation<'a, I>(&self, out_dirs: I) -> Invocation
    where
        I: IntoIterator<Item = &'a Path>,
    {
        Invocation::new(&self.package_manager, &self.project_dir)
            .arg("link")
            .args(
                out_dirs
                    .into_iter()
                    .map(|p| p.to_string_lossy().into_owned()),
            )
    }
}
