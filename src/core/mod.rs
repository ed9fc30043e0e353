//! Core business logic module
//!
//! Process spawning goes through [`crate::infra::process::ToolRunner`], so
//! everything here can be driven without real tools.
//!
//! # Submodules
//!
//! - [`config`] - `.rswrc.json` loading
//! - [`naming`] - Out-name and scope derivation
//! - [`resolver`] - Crate and output directory resolution
//! - [`plan`] - Build plan construction
//! - [`pipeline`] - Build and link execution
//! - [`clean`] - Output removal
//! - [`init`] - Starter config creation

pub mod clean;
pub mod config;
pub mod init;
pub mod naming;
pub mod pipeline;
pub mod plan;
pub mod resolver;
