//! venvkit CLI library: argument parsing, logging setup and the provisioning flow.

pub mod cli;
pub mod flow;
pub mod prompt;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use flow::{Outcome, Provisioner};
use prompt::LinePrompt;
use venvkit_core::config::{load_dotenv, ObservabilityConfig, ProvisionConfig};
use venvkit_core::observability::{init_logging, LogConfig, LogHandle};
use venvkit_env::{EnvDescriptor, ShellLabel, SystemRunner};

/// Exit status for a finished run. Reported failures exit 0 unless
/// `strict_exit` is on, in which case a failed creation exits 1.
pub fn exit_status(outcome: &Outcome, cfg: &ProvisionConfig) -> u8 {
    match outcome {
        Outcome::CreationFailed { .. } if cfg.strict_exit => 1,
        _ => 0,
    }
}

/// Logging as configured, or a console notice and no logging if that fails.
/// Logging problems never stop the interactive flow.
fn setup_logging(cfg: &ObservabilityConfig) -> Option<LogHandle> {
    match LogConfig::from_observability(cfg).and_then(|log_cfg| init_logging(&log_cfg)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("venvkit: logging disabled: {}", e);
            None
        }
    }
}

/// Parse args, set up logging, run one interactive round in the current directory.
pub fn run_cli() -> Result<ExitCode> {
    let _cli = Cli::parse();
    load_dotenv();

    let log = setup_logging(&ObservabilityConfig::from_env());
    let provision_cfg = ProvisionConfig::from_env();

    let provision = || {
        if let Some(path) = log.as_ref().and_then(LogHandle::path) {
            tracing::info!(log_file = %path.display(), "venvkit started");
        }
        Provisioner::new(
            EnvDescriptor::in_current_dir(),
            ShellLabel::detect(),
            LinePrompt::stdio(),
            &SystemRunner,
            io::stdout(),
        )
        .run()
    };
    let outcome = match &log {
        Some(handle) => handle.in_scope(provision),
        None => provision(),
    }
    .context("Write to stdout")?;

    Ok(ExitCode::from(exit_status(&outcome, &provision_cfg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_forgiving_by_default() {
        let cfg = ProvisionConfig::default();
        let failed = Outcome::CreationFailed {
            detail: "boom".to_string(),
        };
        assert_eq!(exit_status(&failed, &cfg), 0);
        assert_eq!(exit_status(&Outcome::CreationDeclined, &cfg), 0);
    }

    #[test]
    fn test_logging_setup_failure_is_not_fatal() {
        let quiet = ObservabilityConfig {
            log_dir: None,
            log_level: "info".to_string(),
            console_filter: None,
        };
        let handle = setup_logging(&quiet).unwrap();
        assert!(handle.path().is_none());

        let bad_level = ObservabilityConfig {
            log_level: "chatty".to_string(),
            ..quiet.clone()
        };
        assert!(setup_logging(&bad_level).is_none());

        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let unwritable = ObservabilityConfig {
            log_dir: Some(blocker.join("logs")),
            ..quiet
        };
        assert!(setup_logging(&unwritable).is_none());
    }

    #[test]
    fn test_exit_status_strict() {
        let cfg = ProvisionConfig { strict_exit: true };
        let failed = Outcome::CreationFailed {
            detail: "boom".to_string(),
        };
        assert_eq!(exit_status(&failed, &cfg), 1);
        for ok in [
            Outcome::Activated,
            Outcome::ActivationDeclined,
            Outcome::CreationDeclined,
            Outcome::Created {
                interpreter: "python3".to_string(),
            },
        ] {
            assert_eq!(exit_status(&ok, &cfg), 0, "{ok:?}");
        }
    }
}
