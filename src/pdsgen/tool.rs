//! Where the tool is running from: the working directory relative paths
//! resolve against, the executable location the default config directory
//! derives from, and the build's version string.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Filesystem anchors for one invocation.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    cwd: PathBuf,
    exe: Option<PathBuf>,
}

impl ToolPaths {
    /// Capture the anchors from the process environment.
    pub fn from_env() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            exe: std::env::current_exe().ok(),
        }
    }

    /// Build anchors explicitly. Tests use this to pin both locations.
    pub fn new(cwd: impl Into<PathBuf>, exe: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            exe,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Default config directory: the `conf` sibling of the executable's
    /// parent directory (install layout `<root>/bin/pdsgen` → `<root>/conf`).
    /// Never checked for existence.
    pub fn default_conf_dir(&self) -> PathBuf {
        self.exe
            .as_deref()
            .and_then(Path::parent)
            .and_then(Path::parent)
            .map(|root| root.join("conf"))
            .unwrap_or_else(|| PathBuf::from("conf"))
    }
}

/// Returns the version string, including git hash and commit date for
/// non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
pub fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conf_dir_derives_from_install_root() {
        let paths = ToolPaths::new("/work", Some(PathBuf::from("/opt/pdsgen/bin/pdsgen")));
        assert_eq!(paths.default_conf_dir(), PathBuf::from("/opt/pdsgen/conf"));
    }

    #[test]
    fn test_default_conf_dir_without_exe_location() {
        let paths = ToolPaths::new("/work", None);
        assert_eq!(paths.default_conf_dir(), PathBuf::from("conf"));
    }

    #[test]
    fn test_version_is_not_empty() {
        assert!(!version().is_empty());
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
