//! [`ExportsFixture`] for exports file test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a single exports file.
///
/// # Example
///
/// ```rust
/// use exports_test_utils::ExportsFixture;
///
/// let fixture = ExportsFixture::with_content("/Users 192.168.64.1 -alldirs\n");
/// assert_eq!(fixture.read(), "/Users 192.168.64.1 -alldirs\n");
/// ```
pub struct ExportsFixture {
    temp_dir: TempDir,
    path: PathBuf,
}

impl ExportsFixture {
    /// A fixture whose exports file has not been created.
    pub fn missing() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exports");
        Self { temp_dir, path }
    }

    /// A fixture whose exports file holds `content`.
    pub fn with_content(content: &str) -> Self {
        let fixture = Self::missing();
        fixture.write(content);
        fixture
    }

    /// Path of the exports file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The exports file path as a string, for path-string APIs.
    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("temp path is valid UTF-8")
    }

    /// Directory containing the exports file.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Current file content, panicking if it cannot be read.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }

    pub fn write(&self, content: &str) {
        fs::write(&self.path, content).unwrap();
    }
}
