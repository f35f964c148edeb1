//! Whole-file reads and writes of the exports file

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::{Error, Result};

/// How a read treats an exports file that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFile {
    /// A missing file reads as empty content.
    Empty,
    /// A missing file is reported as [`Error::NotFound`].
    Error,
}

/// Read the raw bytes of an exports file.
pub fn read_exports(path: impl AsRef<Path>, missing: MissingFile) -> Result<Vec<u8>> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "Read exports file");
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => match missing {
            MissingFile::Empty => {
                tracing::debug!(path = %path.display(), "Exports file missing, starting empty");
                Ok(Vec::new())
            }
            MissingFile::Error => Err(Error::NotFound {
                path: path.to_path_buf(),
            }),
        },
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Overwrite an exports file with `content`.
///
/// The file is created if needed and truncated otherwise. `mode` is applied
/// on unix, including to files that already existed.
pub fn write_exports(path: impl AsRef<Path>, content: &[u8], mode: u32) -> Result<()> {
    let path = path.as_ref();

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path).map_err(|e| Error::io(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(mode))
            .map_err(|e| Error::io(path, e))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote exports file");
    Ok(())
}
