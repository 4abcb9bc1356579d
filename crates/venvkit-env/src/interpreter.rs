//! Interpreter discovery: `python<version>` with a fixed fallback.

use thiserror::Error;

use crate::runner::{CommandRunner, Invocation, OutputMode, RunError};

/// Command used when no version is requested or the requested one is unusable.
pub const DEFAULT_PYTHON: &str = "python3";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("interpreter `{command}` is not available: {source}")]
    NotFound {
        command: String,
        #[source]
        source: RunError,
    },
}

/// The interpreter picked for environment creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    pub command: String,
    /// Requested version whose probe failed, when the default was used instead.
    pub fallback_from: Option<String>,
}

impl Interpreter {
    fn default_python() -> Self {
        Self {
            command: DEFAULT_PYTHON.to_string(),
            fallback_from: None,
        }
    }
}

/// Run `<command> --version` with output suppressed.
pub fn probe(runner: &dyn CommandRunner, command: &str) -> Result<(), ProbeError> {
    let invocation = Invocation::new(command)
        .args(["--version"])
        .output(OutputMode::Suppress);
    runner
        .run(&invocation)
        .map_err(|source| ProbeError::NotFound {
            command: command.to_string(),
            source,
        })
}

/// Pick `python<version_suffix>` if it answers `--version`, else [`DEFAULT_PYTHON`].
/// A blank suffix skips the probe entirely.
pub fn resolve_interpreter_command(runner: &dyn CommandRunner, version_suffix: &str) -> Interpreter {
    let version = version_suffix.trim();
    if version.is_empty() {
        return Interpreter::default_python();
    }

    let candidate = format!("python{}", version);
    match probe(runner, &candidate) {
        Ok(()) => Interpreter {
            command: candidate,
            fallback_from: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, fallback = DEFAULT_PYTHON, "requested interpreter unavailable");
            Interpreter {
                fallback_from: Some(version.to_string()),
                ..Interpreter::default_python()
            }
        }
    }
}
