//! Create a Python virtual environment with `<interpreter> -m venv <name>`.

use crate::descriptor::EnvDescriptor;
use crate::runner::{CommandRunner, Invocation, OutputMode, RunError};

/// Run `<interpreter> -m venv <name>` from the descriptor's root, output inherited.
/// Never deletes or upgrades an existing environment; that is left to `venv` itself.
pub fn create_environment(
    runner: &dyn CommandRunner,
    interpreter: &str,
    env: &EnvDescriptor,
) -> Result<(), RunError> {
    let invocation = Invocation::new(interpreter)
        .args(["-m", "venv", env.name()])
        .current_dir(env.root())
        .output(OutputMode::Inherit);
    tracing::info!(command = %invocation, root = %env.root().display(), "creating virtual environment");
    runner.run(&invocation)
}
