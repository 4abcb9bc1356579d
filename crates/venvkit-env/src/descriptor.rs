//! Environment descriptor: a fixed name plus the root it lives under.

use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_NAME: &str = "venv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDescriptor {
    name: String,
    root: PathBuf,
}

impl EnvDescriptor {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// `venv` under the current directory, addressed relatively.
    pub fn in_current_dir() -> Self {
        Self::new(".", DEFAULT_ENV_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<name>`
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.name)
    }

    /// `<root>/<name>/bin/python`; its presence is what "exists" means.
    pub fn marker_path(&self) -> PathBuf {
        self.path().join("bin").join("python")
    }

    /// True iff the marker exists. Unreadable or missing paths yield false.
    pub fn detect(&self) -> bool {
        let found = self.marker_path().exists();
        tracing::debug!(marker = %self.marker_path().display(), found, "detect environment");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detect_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let env = EnvDescriptor::new(tmp.path(), DEFAULT_ENV_NAME);
        assert!(!env.detect());
    }

    #[test]
    fn test_detect_marker_present() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("venv").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("python"), "").unwrap();

        let env = EnvDescriptor::new(tmp.path(), DEFAULT_ENV_NAME);
        assert!(env.detect());
    }

    #[test]
    fn test_directory_without_marker_is_absent() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("venv").join("bin")).unwrap();
        fs::create_dir_all(tmp.path().join("venv").join("Scripts")).unwrap();
        fs::write(tmp.path().join("venv").join("Scripts").join("python.exe"), "").unwrap();

        let env = EnvDescriptor::new(tmp.path(), DEFAULT_ENV_NAME);
        assert!(!env.detect());
    }

    #[test]
    fn test_paths() {
        let env = EnvDescriptor::in_current_dir();
        assert_eq!(env.name(), "venv");
        assert_eq!(env.path(), Path::new(".").join("venv"));
        assert!(env.marker_path().ends_with("venv/bin/python"));
    }
}
