//! Shell label and activation instructions.
//!
//! A child process cannot change the invoking shell, so activation is always
//! reported as text for the user to run.

use std::fmt;

use venvkit_core::config::{env_keys, env_optional};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellLabel {
    Zsh,
    Bash,
    Windows,
    Other,
}

impl ShellLabel {
    /// Classify from a `SHELL` value and the host OS.
    ///
    /// Check order is zsh, bash, Windows host, other: a Windows host only wins
    /// when the shell name matched neither zsh nor bash.
    pub fn resolve(shell_var: &str, is_windows: bool) -> Self {
        let shell_name = shell_var.rsplit('/').next().unwrap_or("");
        match shell_name {
            "zsh" => ShellLabel::Zsh,
            "bash" => ShellLabel::Bash,
            _ if is_windows => ShellLabel::Windows,
            _ => ShellLabel::Other,
        }
    }

    /// Read `SHELL` (unset counts as empty) and the compile-time host OS.
    pub fn detect() -> Self {
        let shell_var = env_optional(env_keys::SHELL, &[]).unwrap_or_default();
        let label = Self::resolve(&shell_var, cfg!(windows));
        tracing::debug!(shell = %shell_var, label = %label, "resolved shell label");
        label
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShellLabel::Zsh => "zsh",
            ShellLabel::Bash => "bash",
            ShellLabel::Windows => "windows",
            ShellLabel::Other => "other",
        }
    }
}

impl fmt::Display for ShellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The command the user should run to activate `env_name`.
/// Unknown shells get the POSIX `source` form.
pub fn activation_command(label: ShellLabel, env_name: &str) -> String {
    match label {
        ShellLabel::Windows => format!("{}\\Scripts\\activate", env_name),
        ShellLabel::Zsh | ShellLabel::Bash | ShellLabel::Other => {
            format!("source {}/bin/activate", env_name)
        }
    }
}

/// Two-line instruction block: header, then the activation command.
pub fn activation_instructions(label: ShellLabel, env_name: &str) -> String {
    format!(
        "To activate, run this command:\n{}",
        activation_command(label, env_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_shells() {
        assert_eq!(ShellLabel::resolve("/bin/zsh", false), ShellLabel::Zsh);
        assert_eq!(ShellLabel::resolve("/usr/bin/bash", false), ShellLabel::Bash);
        assert_eq!(ShellLabel::resolve("bash", false), ShellLabel::Bash);
        assert_eq!(ShellLabel::resolve("/bin/fish", false), ShellLabel::Other);
        assert_eq!(ShellLabel::resolve("", false), ShellLabel::Other);
    }

    #[test]
    fn test_resolve_windows_only_after_shell_match_fails() {
        assert_eq!(ShellLabel::resolve("", true), ShellLabel::Windows);
        assert_eq!(ShellLabel::resolve("/usr/bin/fish", true), ShellLabel::Windows);
        // Git Bash on Windows still reports bash.
        assert_eq!(ShellLabel::resolve("/usr/bin/bash", true), ShellLabel::Bash);
    }

    #[test]
    fn test_resolve_uses_last_path_segment() {
        assert_eq!(ShellLabel::resolve("/opt/zsh/bin/zsh", false), ShellLabel::Zsh);
        assert_eq!(ShellLabel::resolve("/bin/zsh-5.9", false), ShellLabel::Other);
        assert_eq!(ShellLabel::resolve("/bin/", false), ShellLabel::Other);
    }

    #[test]
    fn test_activation_command() {
        assert_eq!(activation_command(ShellLabel::Zsh, "venv"), "source venv/bin/activate");
        assert_eq!(activation_command(ShellLabel::Bash, "venv"), "source venv/bin/activate");
        assert_eq!(activation_command(ShellLabel::Other, "venv"), "source venv/bin/activate");
        assert_eq!(activation_command(ShellLabel::Windows, "venv"), "venv\\Scripts\\activate");
    }

    #[test]
    fn test_activation_instructions_block() {
        assert_eq!(
            activation_instructions(ShellLabel::Bash, "venv"),
            "To activate, run this command:\nsource venv/bin/activate"
        );
    }
}
