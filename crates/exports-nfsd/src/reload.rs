//! Daemon reload

use crate::config::NfsdConfig;
use crate::error::{Error, Result};
use crate::subprocess::run_capturing;

/// Asks the NFS daemon to re-read its exports.
pub trait Reloader {
    fn reload(&self) -> Result<()>;
}

/// Reloader running `[privilege] nfsd update`.
#[derive(Debug, Clone, Default)]
pub struct NfsdReloader {
    config: NfsdConfig,
}

impl NfsdReloader {
    pub fn new(config: NfsdConfig) -> Self {
        Self { config }
    }

    /// The program and arguments this reloader runs.
    pub fn command_line(&self) -> (String, Vec<String>) {
        let nfsd = self.config.program.to_string_lossy().into_owned();
        match self.config.privilege() {
            Some(privilege) => (privilege.to_string(), vec![nfsd, "update".to_string()]),
            None => (nfsd, vec!["update".to_string()]),
        }
    }
}

impl Reloader for NfsdReloader {
    fn reload(&self) -> Result<()> {
        let (program, args) = self.command_line();
        let captured = run_capturing(&program, &args)?;

        if captured.success() {
            tracing::info!("Reloaded nfsd");
            Ok(())
        } else {
            Err(Error::CommandFailed {
                program,
                code: captured.code,
                stderr: captured.stderr,
            })
        }
    }
}
