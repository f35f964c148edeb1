//! Candidate exports validation

use std::ffi::OsStr;
use std::io::Write;

use crate::config::NfsdConfig;
use crate::error::{Error, Result};
use crate::subprocess::run_capturing;

/// Checks whether a complete candidate exports file is acceptable.
pub trait Validator {
    /// Returns `Ok(())` if `candidate` may be written.
    fn validate(&self, candidate: &[u8]) -> Result<()>;
}

impl<F> Validator for F
where
    F: Fn(&[u8]) -> Result<()>,
{
    fn validate(&self, candidate: &[u8]) -> Result<()> {
        self(candidate)
    }
}

/// Validator backed by `nfsd -F <file> checkexports`.
#[derive(Debug, Clone, Default)]
pub struct NfsdValidator {
    config: NfsdConfig,
}

impl NfsdValidator {
    pub fn new(config: NfsdConfig) -> Self {
        Self { config }
    }
}

impl Validator for NfsdValidator {
    fn validate(&self, candidate: &[u8]) -> Result<()> {
        if !self.config.validate {
            tracing::warn!("Export validation disabled, skipping checkexports");
            return Ok(());
        }

        // Removed when dropped, on every return path
        let mut staged = tempfile::Builder::new()
            .prefix("exports")
            .tempfile()
            .map_err(Error::Staging)?;
        staged.write_all(candidate).map_err(Error::Staging)?;
        staged.flush().map_err(Error::Staging)?;

        let args = [
            OsStr::new("-F"),
            staged.path().as_os_str(),
            OsStr::new("checkexports"),
        ];
        let captured = run_capturing(&self.config.program, args)?;

        if captured.success() {
            tracing::debug!(path = %staged.path().display(), "Candidate exports accepted");
            Ok(())
        } else {
            Err(Error::ValidationFailed {
                diagnostics: captured.stderr,
                code: captured.code,
            })
        }
    }
}
