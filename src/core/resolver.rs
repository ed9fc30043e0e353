//! Output path resolution
//!
//! Every crate lives in `<project>/<root>/<name>` and builds into
//! `<crate dir>/pkg` unless it sets a relative `outDir`. Resolution is
//! lexical: `.` and `..` are collapsed without touching the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::config::defaults::DEFAULT_OUT_DIR;
use crate::core::config::BuildUnit;
use crate::error::PathError;

/// Collapse `.` and `..` components without consulting the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// True for `/abs`, `\abs` and drive-qualified paths
fn is_rooted(path: &str) -> bool {
    let p = Path::new(path);
    p.is_absolute() || p.has_root() || path.starts_with('/') || path.starts_with('\\')
}

/// Resolves crate and output directories under a project directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    project_dir: PathBuf,
    root: PathBuf,
}

impl PathResolver {
    /// `project_dir` is the absolute working directory, `root` the config root
    pub fn new(project_dir: &Path, root: &str) -> Self {
        let project_dir = normalize(project_dir);
        let root = normalize(&project_dir.join(root));
        Self { project_dir, root }
    }

    /// The normalised project directory
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Source directory of a crate, which must stay inside the project
    pub fn unit_dir(&self, name: &str) -> Result<PathBuf, PathError> {
        let dir = normalize(&self.root.join(name));
        tracing::debug!("[crate root] {}", dir.display());
        self.ensure_contained(dir)
    }

    /// Absolute output directory for a crate
    pub fn out_dir(&self, unit: &BuildUnit) -> Result<PathBuf, PathError> {
        let unit_dir = self.unit_dir(&unit.name)?;

        match unit.out_dir.as_deref() {
            Some(out_dir) if is_rooted(out_dir) => Err(PathError::AbsoluteOutDir {
                unit: unit.to_json(),
            }),
            Some(out_dir) => Ok(normalize(&unit_dir.join(out_dir))),
            None => Ok(unit_dir.join(DEFAULT_OUT_DIR)),
        }
    }

    /// Absolute staging directory, relative to the project directory
    pub fn staging_dir(&self, staging: &str) -> Result<PathBuf, PathError> {
        if is_rooted(staging) {
            return Err(PathError::AbsoluteStagingDir {
                path: staging.to_string(),
            });
        }
        self.ensure_contained(normalize(&self.project_dir.join(staging)))
    }

    fn ensure_contained(&self, dir: PathBuf) -> Result<PathBuf, PathError> {
        if dir.starts_with(&self.project_dir) {
            Ok(dir)
        } else {
            Err(PathError::OutsideProject {
                resolved: dir,
                project: self.project_dir.clone(),
            })
        }
    }
}
