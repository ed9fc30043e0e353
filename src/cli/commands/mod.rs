//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod clean;
pub mod init;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every crate in .rswrc.json and link the outputs (default)
    Build {
        /// Fail instead of installing wasm-pack when it is missing
        #[arg(long)]
        no_install: bool,
    },

    /// Create a starter .rswrc.json
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Remove crate output directories and the staging directory
    Clean,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Build { no_install: false }
    }
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        tracing::debug!("[process.cwd] {}", current_dir.display());

        match self {
            Self::Build { no_install } => {
                let options = build::BuildOptions { no_install };
                build::execute(&current_dir, options).await
            }
            Self::Init { force } => init::execute(&current_dir, force).await,
            Self::Clean => clean::execute(&current_dir).await,
        }
    }
}
