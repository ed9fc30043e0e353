//! Project initialization logic
//!
//! Writes a starter `.rswrc.json` into the project directory.

use std::path::{Path, PathBuf};

use crate::core::config::ProjectConfig;
use crate::error::InitError;
use crate::infra::filesystem;

/// Write the starter config, refusing to overwrite unless `force` is set
pub fn init_project(project_dir: &Path, force: bool) -> Result<PathBuf, InitError> {
    let path = ProjectConfig::path_in(project_dir);

    if path.exists() && !force {
        return Err(InitError::AlreadyExists { path });
    }

    filesystem::write_file(&path, &ProjectConfig::starter_json())?;
    tracing::info!("Wrote {}", path.display());
    Ok(path)
}
