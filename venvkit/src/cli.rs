use clap::Parser;

/// venvkit - find, activate or create the project's Python virtual environment.
///
/// Runs one interactive round in the current directory. Configuration comes
/// from environment variables (VENVKIT_LOG_DIR, VENVKIT_LOG_LEVEL,
/// VENVKIT_CONSOLE_LOG, VENVKIT_STRICT_EXIT) or a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "venvkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
