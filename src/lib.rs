//! rsw - WebAssembly crate build orchestrator
//!
//! Builds every crate listed in `.rswrc.json` with wasm-pack and links the
//! resulting packages into the host project with a single `npm link`.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Config model, naming, path resolution, plan and pipeline
//! - [`infra`] - Infrastructure layer (processes, tool discovery, filesystem)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
