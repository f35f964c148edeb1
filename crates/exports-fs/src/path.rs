//! Target path resolution for the exports file

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_EXPORTS_FILE;

/// Location of the exports file an operation reads and writes.
///
/// An empty input resolves to [`DEFAULT_EXPORTS_FILE`]. Any other input is
/// kept verbatim, relative paths included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportsPath {
    inner: PathBuf,
}

impl ExportsPath {
    /// Resolve a caller-supplied path, substituting the default for `""`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let inner = if path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_EXPORTS_FILE)
        } else {
            path.to_path_buf()
        };
        Self { inner }
    }

    /// The system exports file.
    pub fn system() -> Self {
        Self::new(DEFAULT_EXPORTS_FILE)
    }

    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    /// Check whether this path names the system exports file.
    pub fn is_default(&self) -> bool {
        self.inner == Path::new(DEFAULT_EXPORTS_FILE)
    }
}

impl Default for ExportsPath {
    fn default() -> Self {
        Self::system()
    }
}

impl AsRef<Path> for ExportsPath {
    fn as_ref(&self) -> &Path {
        &self.inner
    }
}

impl std::fmt::Display for ExportsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl From<&str> for ExportsPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ExportsPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for ExportsPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for ExportsPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resolves_to_default() {
        let path = ExportsPath::new("");
        assert_eq!(path.as_path(), Path::new("/etc/exports"));
        assert!(path.is_default());
    }

    #[test]
    fn test_relative_path_kept_verbatim() {
        let path = ExportsPath::from("exports.d/local");
        assert_eq!(path.as_path(), Path::new("exports.d/local"));
        assert!(!path.is_default());
    }

    #[test]
    fn test_display_shows_resolved_path() {
        assert_eq!(ExportsPath::default().to_string(), "/etc/exports");
    }
}
