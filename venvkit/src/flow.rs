//! The interactive provisioning flow.
//!
//! One pass, no loops or retries:
//!
//! ```text
//! Start ─┬─ marker present ─ ExistsPrompt ─┬─ y ─ PrintActivation ─ End
//!        │                                 └─ * ─ End (not activating)
//!        └─ marker absent ── AbsentPrompt ─┬─ y ─ GatherVersion ─ ResolveInterpreter ─ CreateEnv ─ End
//!                                          └─ * ─ End (not creating)
//! ```
//!
//! External-command failures are reported on the output stream and end the
//! flow with [`Outcome::CreationFailed`]; only writes to the output stream can
//! make [`Provisioner::run`] return an error.

use std::io::{self, Write};

use venvkit_env::{
    activation_instructions, create_environment, resolve_interpreter_command, CommandRunner,
    EnvDescriptor, ShellLabel,
};

use crate::prompt::{prompt_text, prompt_yes_no, PromptSource};

pub const ACTIVATE_QUESTION: &str = "Do you want to activate it? (y/n): ";
pub const CREATE_QUESTION: &str = "Do you want to create a new one? (y/n): ";
pub const VERSION_QUESTION: &str =
    "Enter Python version to use (e.g., 3.8, leave blank for default): ";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Activated,
    ActivationDeclined,
    Created { interpreter: String },
    CreationDeclined,
    CreationFailed { detail: String },
}

#[derive(Debug)]
enum State {
    Start,
    ExistsPrompt,
    AbsentPrompt,
    PrintActivation,
    GatherVersion,
    ResolveInterpreter { version: String },
    CreateEnv { interpreter: String },
    End(Outcome),
}

pub struct Provisioner<'a, P, W> {
    env: EnvDescriptor,
    shell: ShellLabel,
    prompt: P,
    runner: &'a dyn CommandRunner,
    out: W,
}

impl<'a, P: PromptSource, W: Write> Provisioner<'a, P, W> {
    pub fn new(
        env: EnvDescriptor,
        shell: ShellLabel,
        prompt: P,
        runner: &'a dyn CommandRunner,
        out: W,
    ) -> Self {
        Self {
            env,
            shell,
            prompt,
            runner,
            out,
        }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Drive the state machine from `Start` to `End`.
    pub fn run(&mut self) -> io::Result<Outcome> {
        let mut state = State::Start;
        loop {
            tracing::debug!(?state, "provision step");
            state = match state {
                State::End(outcome) => {
                    self.out.flush()?;
                    tracing::info!(?outcome, env = self.env.name(), "provisioning finished");
                    return Ok(outcome);
                }
                other => self.step(other)?,
            };
        }
    }

    fn step(&mut self, state: State) -> io::Result<State> {
        let name = self.env.name().to_string();
        let next = match state {
            State::Start => {
                if self.env.detect() {
                    writeln!(self.out, "Virtual environment '{}' exists.", name)?;
                    State::ExistsPrompt
                } else {
                    writeln!(self.out, "Virtual environment '{}' not found.", name)?;
                    State::AbsentPrompt
                }
            }
            State::ExistsPrompt => {
                self.out.flush()?;
                if prompt_yes_no(&mut self.prompt, ACTIVATE_QUESTION) {
                    State::PrintActivation
                } else {
                    writeln!(self.out, "Not activating the virtual environment.")?;
                    State::End(Outcome::ActivationDeclined)
                }
            }
            State::PrintActivation => {
                writeln!(self.out)?;
                self.write_activation()?;
                State::End(Outcome::Activated)
            }
            State::AbsentPrompt => {
                self.out.flush()?;
                if prompt_yes_no(&mut self.prompt, CREATE_QUESTION) {
                    State::GatherVersion
                } else {
                    writeln!(self.out, "Not creating a virtual environment.")?;
                    State::End(Outcome::CreationDeclined)
                }
            }
            State::GatherVersion => State::ResolveInterpreter {
                version: prompt_text(&mut self.prompt, VERSION_QUESTION),
            },
            State::ResolveInterpreter { version } => {
                let interpreter = resolve_interpreter_command(self.runner, &version);
                if let Some(ref requested) = interpreter.fallback_from {
                    writeln!(
                        self.out,
                        "Python {} not found. Using default Python.",
                        requested
                    )?;
                }
                State::CreateEnv {
                    interpreter: interpreter.command,
                }
            }
            State::CreateEnv { interpreter } => {
                self.out.flush()?;
                match create_environment(self.runner, &interpreter, &self.env) {
                    Ok(()) => {
                        writeln!(self.out)?;
                        writeln!(
                            self.out,
                            "Virtual environment '{}' created successfully!",
                            name
                        )?;
                        self.write_activation()?;
                        State::End(Outcome::Created { interpreter })
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "virtual environment creation failed");
                        writeln!(self.out, "Error creating virtual environment: {}", e)?;
                        State::End(Outcome::CreationFailed {
                            detail: e.to_string(),
                        })
                    }
                }
            }
            State::End(outcome) => State::End(outcome),
        };
        Ok(next)
    }

    /// Instruction block followed by a blank line.
    fn write_activation(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}\n",
            activation_instructions(self.shell, self.env.name())
        )
    }
}
