//! nfsd invocation settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the nfsd binary
pub const DEFAULT_NFSD_PROGRAM: &str = "/sbin/nfsd";

/// Default privilege escalation command used for reloads
pub const DEFAULT_PRIVILEGE: &str = "sudo";

/// How nfsd is invoked for validation and reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NfsdConfig {
    /// Path to the nfsd binary
    pub program: PathBuf,
    /// Command prefixed to reloads; empty runs nfsd directly
    pub privilege: Option<String>,
    /// Whether candidates are checked before they are written
    pub validate: bool,
}

impl Default for NfsdConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_NFSD_PROGRAM),
            privilege: Some(DEFAULT_PRIVILEGE.to_string()),
            validate: true,
        }
    }
}

impl NfsdConfig {
    /// The privilege command, if one is configured and non-empty.
    pub fn privilege(&self) -> Option<&str> {
        self.privilege.as_deref().filter(|p| !p.trim().is_empty())
    }
}
