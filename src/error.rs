//! Error types for rsw
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `.rswrc.json`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file does not exist in the project directory
    #[error("missing `{file}` file in {dir}")]
    NotFound { file: String, dir: PathBuf },

    /// Config file exists but cannot be read
    #[error("Cannot read config: {0}")]
    Unreadable(#[from] FilesystemError),

    /// Config file is not valid JSON or does not match the schema
    #[error("`{file}` is not a valid config: {error}\n`{content}`")]
    Parse {
        file: String,
        error: String,
        content: String,
    },

    /// The required crate list is absent
    #[error("`{file}` is missing the `crates` field.\n`{content}`")]
    MissingCrates { file: String, content: String },

    /// Schema version this binary does not understand
    #[error("`{file}` declares unsupported version {found} (supported: {supported})")]
    UnsupportedVersion {
        file: String,
        found: u32,
        supported: u32,
    },

    /// Unit name that cannot be turned into a package name
    #[error("Invalid crate name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

/// Path policy violations found while resolving output directories
#[derive(Error, Debug)]
pub enum PathError {
    /// Unit directory resolves outside the project directory
    #[error(
        "Invalid root ~> `root` must be included in the project root path \
         ('{resolved}' is outside '{project}')"
    )]
    OutsideProject { resolved: PathBuf, project: PathBuf },

    /// `outDir` override is absolute
    #[error("Invalid outDir ~> Please use relative path.\n`{unit}`")]
    AbsoluteOutDir { unit: String },

    /// Crate source directory does not exist
    #[error("Crate '{unit}' has no source directory at '{path}'")]
    MissingSourceDir { unit: String, path: PathBuf },

    /// `stagingDir` is absolute
    #[error("Invalid stagingDir '{path}' ~> Please use relative path.")]
    AbsoluteStagingDir { path: String },

    /// Directory that must not be deleted recursively
    #[error("Refusing to remove '{path}': {reason}")]
    Unremovable { path: PathBuf, reason: String },
}

/// External tool errors (wasm-pack, package manager)
#[derive(Error, Debug)]
pub enum ToolError {
    /// Tool binary is not on PATH and auto-install is disabled
    #[error("Cannot find `{tool}` in your PATH. Install it with `{install_hint}` or see {docs}")]
    NotFound {
        tool: String,
        install_hint: String,
        docs: String,
    },

    /// Auto-install ran but the tool is still missing or the install failed
    #[error("Failed to install `{tool}` via `{package_manager}`")]
    InstallFailed {
        tool: String,
        package_manager: String,
    },

    /// Process could not be started
    #[error("Failed to run `{program}`: {error}")]
    Spawn { program: String, error: String },

    /// wasm-pack returned a non-zero status
    #[error("wasm-pack for crate {unit} failed ({status})")]
    BuildFailed { unit: String, status: String },

    /// Package manager link returned a non-zero status
    #[error("`{package_manager} link` failed ({status})")]
    LinkFailed {
        package_manager: String,
        status: String,
    },
}

/// Project initialization errors
#[derive(Error, Debug)]
pub enum InitError {
    /// Config file already present
    #[error("`{path}` already exists. Use --force to overwrite it")]
    AlreadyExists { path: PathBuf },

    /// Writing the starter config failed
    #[error("Failed to create config: {0}")]
    Write(#[from] FilesystemError),
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level rsw error type
#[derive(Error, Debug)]
pub enum RswError {
    /// Config error
    #[error("[rsw::config] {0}")]
    Config(#[from] ConfigError),

    /// Path policy error
    #[error("[rsw::path] {0}")]
    Path(#[from] PathError),

    /// External tool error
    #[error("[rsw::tool] {0}")]
    Tool(#[from] ToolError),

    /// Init error
    #[error("[rsw::init] {0}")]
    Init(#[from] InitError),

    /// Filesystem error
    #[error("[rsw::fs] {0}")]
    Filesystem(#[from] FilesystemError),
}
