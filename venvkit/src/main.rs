use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    venvkit::run_cli()
}
