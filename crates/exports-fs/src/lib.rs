//! Filesystem access for NFS exports files
//!
//! Resolves the target exports path, reads and writes the whole file in one
//! pass, and loads tool settings from disk.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::{DEFAULT_EXPORTS_FILE, DEFAULT_FILE_MODE};
pub use error::{Error, Result};
pub use io::{MissingFile, read_exports, write_exports};
pub use path::ExportsPath;
