//! Environment variable keys.

/// Shell identification, read to pick activation instructions.
pub const SHELL: &str = "SHELL";

/// Observability and logging
pub mod observability {
    /// Directory that receives the timestamped log file. Default: `./logs`.
    pub const VENVKIT_LOG_DIR: &str = "VENVKIT_LOG_DIR";

    /// Minimum severity written to the log file (`trace` .. `error`).
    pub const VENVKIT_LOG_LEVEL: &str = "VENVKIT_LOG_LEVEL";

    /// `EnvFilter` directive; when set, diagnostics are mirrored to stderr.
    pub const VENVKIT_CONSOLE_LOG: &str = "VENVKIT_CONSOLE_LOG";
}

/// Provisioning behavior
pub mod provision {
    /// Exit non-zero when environment creation fails.
    pub const VENVKIT_STRICT_EXIT: &str = "VENVKIT_STRICT_EXIT";
}
