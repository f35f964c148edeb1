//! Settings file for the exports store

use std::path::{Path, PathBuf};

use exports_fs::{ConfigStore, DEFAULT_EXPORTS_FILE, DEFAULT_FILE_MODE};
use exports_nfsd::NfsdConfig;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Where the exports file lives and how it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportsSection {
    pub file: PathBuf,
    /// Permission mode for written files, e.g. `0o644` (TOML accepts octal)
    pub mode: u32,
}

impl Default for ExportsSection {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_EXPORTS_FILE),
            mode: DEFAULT_FILE_MODE,
        }
    }
}

/// Top-level settings.
///
/// ```toml
/// [exports]
/// file = "/etc/exports"
///
/// [nfsd]
/// program = "/sbin/nfsd"
/// privilege = "sudo"
/// validate = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub exports: ExportsSection,
    pub nfsd: NfsdConfig,
}

impl Settings {
    /// Load settings from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }
}
