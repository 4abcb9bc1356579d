//! CommandRunner trait: the seam between provisioning logic and process spawning.
//!
//! [`SystemRunner`] spawns real processes with `std::process::Command`.
//! Tests provide their own implementation and never touch the OS.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

/// What happens to the child's stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child writes straight to our terminal.
    Inherit,
    /// Child output is captured and dropped.
    Suppress,
}

/// A single external command: program, arguments, optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
    pub output: OutputMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            output: OutputMode::Inherit,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command `{command}` failed ({status})")]
    Failed { command: String, status: String },
}

pub trait CommandRunner {
    /// Run to completion. `Ok` only when the process launched and exited successfully.
    fn run(&self, invocation: &Invocation) -> Result<(), RunError>;
}

/// Spawns real processes and blocks until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), RunError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(ref dir) = invocation.current_dir {
            cmd.current_dir(dir);
        }
        let launch_err = |source| RunError::Launch {
            command: invocation.to_string(),
            source,
        };

        let status = match invocation.output {
            OutputMode::Inherit => cmd.status().map_err(launch_err)?,
            OutputMode::Suppress => {
                cmd.stdin(Stdio::null());
                cmd.output().map_err(launch_err)?.status
            }
        };
        tracing::debug!(command = %invocation, %status, "command finished");

        if status.success() {
            Ok(())
        } else {
            Err(RunError::Failed {
                command: invocation.to_string(),
                status: status.to_string(),
            })
        }
    }
}
