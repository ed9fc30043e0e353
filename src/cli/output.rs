//! Output formatting
//!
//! Status-prefixed messages, the global quiet/json/verbose switches and the
//! top-level error display used by `main`.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::defaults::{CONFIG_FILE, DEFAULT_ROOT};
use crate::config::urls::{PLUGIN_OPTIONS, RSW_HOME};
use crate::error::{ConfigError, RswError};

static QUIET: AtomicBool = AtomicBool::new(false);
static JSON: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicU8 = AtomicU8::new(0);

/// Output mode selected on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Machine-readable output
    pub json: bool,
    /// Verbosity level (0 = warn, 1 = info, 2+ = debug)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Make this configuration visible to every command
    pub fn apply_global(self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        JSON.store(self.json, Ordering::Relaxed);
        VERBOSE.store(self.verbose, Ordering::Relaxed);
    }

    /// Tracing level implied by the flags
    pub fn log_level(self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Whether `--quiet` is active
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether `--json` is active
pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

/// Current verbosity level
pub fn verbosity() -> u8 {
    VERBOSE.load(Ordering::Relaxed)
}

fn is_silent() -> bool {
    is_quiet() || is_json()
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";

    /// Link summary entry prefix
    pub const LINKED: &str = "↳";
}

/// Print a success message
pub fn print_success(message: &str) {
    if !is_silent() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print an informational message
pub fn print_info(message: &str) {
    if !is_silent() {
        println!("{} {message}", status::INFO);
    }
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    if !is_silent() {
        eprintln!("{} {message}", status::WARNING);
    }
}

/// Print an indented detail line
pub fn print_detail(message: &str) {
    if !is_silent() {
        println!("  {message}");
    }
}

/// How to set up a project, shown when the config file is missing
pub fn usage_help() -> String {
    format!(
        r#"
Command Help:
[rsw]: {RSW_HOME}

Usage:
  step1: create {CONFIG_FILE} in the project root path (or run `rsw init`).
  step2: {CONFIG_FILE}
      {{
        "root": "{DEFAULT_ROOT}",
        "crates": []
      }}
      root: The default is the project root path, which supports customization,
            but cannot exceed the project root path.
      crates: and `[vite-plugin-rsw]: plugin options` configuration is the same.
            {PLUGIN_OPTIONS}
  step3: package.json
      {{
        "scripts": {{
          "rsw:deploy": "rsw && npm run build"
        }}
      }}"#
    )
}

/// Messages of an error chain, dropping causes already spelled out by the
/// wrapper above them (`[rsw::path] X` wraps `X`)
fn chain_messages(error: &anyhow::Error) -> Vec<String> {
    let mut messages = Vec::new();
    let mut previous = String::new();

    for cause in error.chain() {
        let message = cause.to_string();
        if messages.is_empty() || !previous.ends_with(&message) {
            messages.push(message.clone());
        }
        previous = message;
    }

    messages
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    let messages = chain_messages(error);
    let mut messages = messages.iter();

    if let Some(head) = messages.next() {
        eprintln!("{} {head}", status::ERROR);
    }
    for cause in messages {
        eprintln!("  Caused by: {cause}");
    }

    let missing_config = error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<RswError>(),
            Some(RswError::Config(ConfigError::NotFound { .. }))
        ) || matches!(
            cause.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound { .. })
        )
    });

    if missing_config && !is_json() {
        eprintln!("{}", usage_help());
    }
}
