//! Environment variable loading helpers.
//!
//! Fallback chains live here so call sites do not repeat `or_else` ladders.

use std::env;
use std::path::Path;

/// Load `.env` from the current directory into the process environment.
/// Runs once per process; variables that are already set are never overridden.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        load_dotenv_from_dir(&dir);
    });
}

/// Load `<dir>/.env` into the process environment without overriding existing variables.
/// Returns the number of variables that were set.
pub fn load_dotenv_from_dir(dir: &Path) -> usize {
    let Ok(content) = std::fs::read_to_string(dir.join(".env")) else {
        return 0;
    };
    let mut applied = 0;
    for (key, value) in content.lines().filter_map(parse_dotenv_line) {
        if env::var(key).is_err() {
            set_env_var(key, value);
            applied += 1;
        }
    }
    tracing::debug!(dir = %dir.display(), applied, "loaded .env");
    applied
}

fn parse_dotenv_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let mut value = value.trim();
    // Strip inline comment (# not inside quotes)
    if let Some(hash_pos) = value.find('#') {
        let before_hash = value[..hash_pos].trim_end();
        if !before_hash.contains('"') && !before_hash.contains('\'') {
            value = before_hash;
        }
    }
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        value = &value[1..value.len() - 1];
    }
    if key.is_empty() {
        None
    } else {
        Some((key, value))
    }
}

/// Read the primary variable, then each alias; fall back to `default` when unset or empty.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// Like [`env_or`] but returns `None` when unset; blank values count as unset.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// Boolean variable: 0/false/no/off are false, any other value is true.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    let v = env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()));
    match v.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

// ─── Centralized env::set_var / remove_var ──────────────────────────────────
//
// Callers must only use these before any extra threads are spawned.

/// Set a single environment variable.
#[allow(unsafe_code)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

/// Remove a single environment variable.
#[allow(unsafe_code)]
pub fn remove_env_var(key: &str) {
    unsafe { env::remove_var(key) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotenv_line_variants() {
        assert_eq!(parse_dotenv_line("A=1"), Some(("A", "1")));
        assert_eq!(parse_dotenv_line("  B = two  "), Some(("B", "two")));
        assert_eq!(parse_dotenv_line("C=\"quoted value\""), Some(("C", "quoted value")));
        assert_eq!(parse_dotenv_line("D='single'"), Some(("D", "single")));
        assert_eq!(parse_dotenv_line("E=plain # trailing"), Some(("E", "plain")));
        assert_eq!(parse_dotenv_line("# comment"), None);
        assert_eq!(parse_dotenv_line(""), None);
        assert_eq!(parse_dotenv_line("=orphan"), None);
        assert_eq!(parse_dotenv_line("no_equals_sign"), None);
    }

    #[test]
    fn test_load_dotenv_from_dir_does_not_override() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(".env"),
            "VENVKIT_TEST_DOTENV_NEW=from_file\nVENVKIT_TEST_DOTENV_SET=from_file\n",
        )
        .unwrap();
        set_env_var("VENVKIT_TEST_DOTENV_SET", "from_process");

        let applied = load_dotenv_from_dir(tmp.path());

        assert_eq!(applied, 1);
        assert_eq!(env::var("VENVKIT_TEST_DOTENV_NEW").unwrap(), "from_file");
        assert_eq!(env::var("VENVKIT_TEST_DOTENV_SET").unwrap(), "from_process");
        remove_env_var("VENVKIT_TEST_DOTENV_NEW");
        remove_env_var("VENVKIT_TEST_DOTENV_SET");
    }

    #[test]
    fn test_load_dotenv_from_dir_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(load_dotenv_from_dir(tmp.path()), 0);
    }

    #[test]
    fn test_env_bool_values() {
        let key = "VENVKIT_TEST_ENV_BOOL";
        remove_env_var(key);
        assert!(!env_bool(key, &[], false));
        assert!(env_bool(key, &[], true));
        for off in ["0", "false", "No", " OFF "] {
            set_env_var(key, off);
            assert!(!env_bool(key, &[], true), "{off:?} should be false");
        }
        for on in ["1", "true", "yes", "anything"] {
            set_env_var(key, on);
            assert!(env_bool(key, &[], false), "{on:?} should be true");
        }
        remove_env_var(key);
    }

    #[test]
    fn test_env_or_and_optional_fallbacks() {
        let primary = "VENVKIT_TEST_PRIMARY";
        let alias = "VENVKIT_TEST_ALIAS";
        remove_env_var(primary);
        remove_env_var(alias);
        assert_eq!(env_or(primary, &[alias], || "dflt".to_string()), "dflt");
        assert_eq!(env_optional(primary, &[alias]), None);

        set_env_var(alias, "from_alias");
        assert_eq!(env_or(primary, &[alias], || "dflt".to_string()), "from_alias");

        set_env_var(primary, "   ");
        assert_eq!(env_optional(primary, &[alias]), None);

        set_env_var(primary, "from_primary");
        assert_eq!(env_optional(primary, &[alias]).as_deref(), Some("from_primary"));
        remove_env_var(primary);
        remove_env_var(alias);
    }
}
