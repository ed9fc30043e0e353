//! External process execution
//!
//! Every external tool (wasm-pack, npm) goes through [`ToolRunner`] so the
//! pipeline can be driven by a recording runner in tests.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ToolError;

/// A fully specified command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
}

impl Invocation {
    /// Create an invocation with no arguments
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
}

impl ToolStatus {
    /// Status of a process that exited with `code`
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Whether the process exited with 0
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status: {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs external commands to completion
pub trait ToolRunner {
    /// Run the invocation and block until it exits
    fn run(&mut self, invocation: &Invocation) -> Result<ToolStatus, ToolError>;
}

/// Runs commands as child processes with inherited stdio
#[derive(Debug, Default)]
pub struct SystemRunner {
    stdout_to_stderr: bool,
}

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Send child stdout to our stderr, keeping our stdout for JSON
    #[must_use]
    pub fn stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn command(&self, program: &Path, invocation: &Invocation) -> Command {
        let mut command = Command::new(program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        if self.stdout_to_stderr {
            command.stdout(Stdio::from(std::io::stderr()));
        }
        command
    }
}

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ToolStatus, ToolError> {
        // Resolve through PATH so `npm` finds `npm.cmd` on Windows
        let program = which::which(&invocation.program)
            .unwrap_or_else(|_| PathBuf::from(&invocation.program));

        tracing::debug!("[spawn] {} (cwd: {})", invocation, invocation.cwd.display());

        let status = self
            .command(&program, invocation)
            .status()
            .map_err(|e| ToolError::Spawn {
                program: invocation.program.clone(),
                error: e.to_string(),
            })?;

        Ok(ToolStatus {
            code: status.code(),
        })
    }
}

/// Runner that records invocations and replays scripted statuses
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRunner {
    /// Everything that was run, in order
    pub calls: Vec<Invocation>,
    /// Argument that makes a call exit with 1
    pub fail_when: Option<String>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn failing_on(needle: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_when: Some(needle.to_string()),
        }
    }

    pub fn programs(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.program.as_str()).collect()
    }
}

#[cfg(test)]
impl ToolRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ToolStatus, ToolError> {
        self.calls.push(invocation.clone());
        let fails = self
            .fail_when
            .as_ref()
            .is_some_and(|needle| invocation.args.iter().any(|a| a == needle));
        Ok(ToolStatus::exited(i32::from(fails)))
    }
}
