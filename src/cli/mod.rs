//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// rsw - build wasm-pack crates and link them into your npm project
///
/// Reads `.rswrc.json` from the current directory, builds every listed
/// crate with wasm-pack and links the outputs with one `npm link`.
#[derive(Parser, Debug)]
#[command(name = "rsw")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command; no subcommand means `build`
    pub async fn run(self) -> Result<()> {
        self.command.unwrap_or_default().run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["rsw"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rsw", "build", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Some(Commands::Build { no_install: false })
        ));
    }

    #[test]
    fn test_init_force_flag() {
        let cli = Cli::try_parse_from(["rsw", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }
}
