//! Python virtual environment plumbing: detection, shell-specific activation
//! instructions, interpreter probing and `python -m venv` creation.
//!
//! Process spawning goes through [`runner::CommandRunner`] so callers and tests
//! can substitute their own implementation.

pub mod builder;
pub mod descriptor;
pub mod interpreter;
pub mod runner;
pub mod shell;

pub use builder::create_environment;
pub use descriptor::{EnvDescriptor, DEFAULT_ENV_NAME};
pub use interpreter::{probe, resolve_interpreter_command, Interpreter, ProbeError, DEFAULT_PYTHON};
pub use runner::{CommandRunner, Invocation, OutputMode, RunError, SystemRunner};
pub use shell::{activation_command, activation_instructions, ShellLabel};
