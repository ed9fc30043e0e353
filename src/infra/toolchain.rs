//! wasm-pack discovery and installation
//!
//! Finds the wasm-pack binary on PATH and, depending on the install policy,
//! installs it through the package manager when it is missing.

use std::path::{Path, PathBuf};

use crate::config::defaults::{WASM_PACK, WASM_PACK_PACKAGE};
use crate::config::urls::WASM_PACK_INSTALL;
use crate::error::ToolError;
use crate::infra::process::{Invocation, ToolRunner};

/// What to do when wasm-pack is not on PATH
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPolicy {
    /// Run `<pm> install -g wasm-pack`
    AutoInstall,
    /// Fail with installation instructions
    FailFast,
}

impl InstallPolicy {
    /// Policy from the config flag, with the CLI able to force fail-fast
    pub fn from_flags(auto_install: bool, no_install: bool) -> Self {
        if auto_install && !no_install {
            Self::AutoInstall
        } else {
            Self::FailFast
        }
    }
}

/// Located wasm-pack binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasmPack {
    path: PathBuf,
}

impl WasmPack {
    /// Wrap a known wasm-pack path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the wasm-pack binary
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Program string used for invocations
    pub fn program(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Look up wasm-pack on PATH
pub fn find_wasm_pack() -> Option<PathBuf> {
    which::which(WASM_PACK).ok()
}

/// Make sure wasm-pack is available, installing it if the policy allows
pub fn ensure_wasm_pack<F, R>(
    find: F,
    policy: InstallPolicy,
    package_manager: &str,
    project_dir: &Path,
    runner: &mut R,
) -> Result<WasmPack, ToolError>
where
    F: Fn() -> Option<PathBuf>,
    R: ToolRunner + ?Sized,
{
    if let Some(path) = find() {
        tracing::debug!("`{WASM_PACK}` command exists at {}", path.display());
        return Ok(WasmPack::new(path));
    }

    tracing::debug!("Cannot find `{WASM_PACK}` in your PATH");

    let install = Invocation::new(package_manager, project_dir).args([
        "install",
        "-g",
        WASM_PACK_PACKAGE,
    ]);

    if policy == InstallPolicy::FailFast {
        return Err(ToolError::NotFound {
            tool: WASM_PACK.to_string(),
            install_hint: install.to_string(),
            docs: WASM_PACK_INSTALL.to_string(),
        });
    }

    tracing::info!("Installing {WASM_PACK_PACKAGE}: {install}");
    let status = runner.run(&install)?;

    let installed = if status.success() { find() } else { None };
    match installed {
        Some(path) => {
            tracing::debug!("`{WASM_PACK}` installation complete");
            Ok(WasmPack::new(path))
        }
        None => Err(ToolError::InstallFailed {
            tool: WASM_PACK.to_string(),
            package_manager: package_manager.to_string(),
        }),
    }
}
