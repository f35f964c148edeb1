//! One-shot operations on an exports file path.
//!
//! Each call builds an [`ExportStore`] with the default nfsd collaborators.
//! An empty `exports_file` selects `/etc/exports`.

use exports_blocks::ManagedExports;

use crate::Result;
use crate::store::ExportStore;

/// Add an export block. See [`ExportStore::add`].
pub fn add(exports_file: &str, identifier: &str, export: &str) -> Result<Vec<u8>> {
    ExportStore::new(exports_file).add(identifier, export)
}

/// Remove an export block. See [`ExportStore::remove`].
pub fn remove(exports_file: &str, identifier: &str) -> Result<Vec<u8>> {
    ExportStore::new(exports_file).remove(identifier)
}

/// Check for an export block. Only blocks written by [`add`] are recognised.
pub fn exists(exports_file: &str, identifier: &str) -> Result<bool> {
    ExportStore::new(exports_file).exists(identifier)
}

/// Exports created by this crate. Other entries in the file are not returned.
pub fn list(exports_file: &str) -> Result<ManagedExports> {
    ExportStore::new(exports_file).list()
}

/// Every export line in the file, without checking validity.
pub fn list_all(exports_file: &str) -> Result<Vec<String>> {
    ExportStore::new(exports_file).list_all()
}

/// Reload nfsd with `sudo /sbin/nfsd update`.
pub fn reload_daemon() -> Result<()> {
    ExportStore::new("").reload_daemon()
}
