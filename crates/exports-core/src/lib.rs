//! Managed export blocks in NFS exports files
//!
//! [`ExportStore`] adds, removes, checks and lists marker-delimited blocks in
//! an exports file, validating additions through nfsd before they reach disk.
//! The [`ops`] functions are one-shot shorthands taking a path string.
//!
//! The store does no locking. Two writers on the same file race and the last
//! write wins.

pub mod error;
pub mod ops;
pub mod settings;
pub mod store;

pub use error::{Error, Result};
pub use exports_blocks::{ManagedExport, ManagedExports};
pub use exports_nfsd::{NfsdConfig, Reloader, Validator};
pub use ops::{add, exists, list, list_all, reload_daemon, remove};
pub use settings::{ExportsSection, Settings};
pub use store::{AddOutcome, ExportStore};
