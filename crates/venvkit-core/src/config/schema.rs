//! Config structs grouped by concern, loaded from environment variables.

use super::env_keys::{observability as obv_keys, provision as prov_keys};
use super::loader::{env_bool, env_optional, env_or};
use std::path::PathBuf;

/// Observability config: log directory, file log level, optional console mirror.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// File logging is off unless `VENVKIT_LOG_DIR` is set.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub console_filter: Option<String>,
}

impl ObservabilityConfig {
    /// Load from the environment (`.env` is loaded first). A relative
    /// `VENVKIT_LOG_DIR` resolves against the current directory.
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        let log_dir = env_optional(obv_keys::VENVKIT_LOG_DIR, &[])
            .map(PathBuf::from)
            .map(|p| {
                if p.is_absolute() {
                    p
                } else {
                    std::env::current_dir()
                        .unwrap_or_else(|_| PathBuf::from("."))
                        .join(p)
                }
            });
        let log_level = env_or(obv_keys::VENVKIT_LOG_LEVEL, &[], || "info".to_string());
        let console_filter = env_optional(obv_keys::VENVKIT_CONSOLE_LOG, &[]);
        Self {
            log_dir,
            log_level,
            console_filter,
        }
    }
}

/// Provisioning behavior switches.
#[derive(Debug, Clone, Default)]
pub struct ProvisionConfig {
    /// Exit with status 1 when the environment-creation command fails.
    /// Off by default: failures are reported on stdout and the run still exits 0.
    pub strict_exit: bool,
}

impl ProvisionConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            strict_exit: env_bool(prov_keys::VENVKIT_STRICT_EXIT, &[], false),
        }
    }
}
