//! Error types for exports-core

use std::path::PathBuf;

/// Result type for exports-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing export blocks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The exports file does not exist
    #[error("Exports file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// No managed block carries the identifier
    #[error("Could not find export {identifier} in {path}")]
    IdentifierNotFound { identifier: String, path: PathBuf },

    /// The checker rejected the candidate exports; nothing was written
    #[error("Export verification failed for {path}:\n{diagnostics}")]
    ValidationFailed { path: PathBuf, diagnostics: String },

    /// An external nfsd command could not run or failed
    #[error(transparent)]
    SubprocessFailed(exports_nfsd::Error),

    /// Any other filesystem or settings error
    #[error(transparent)]
    Fs(exports_fs::Error),
}

impl From<exports_fs::Error> for Error {
    fn from(err: exports_fs::Error) -> Self {
        match err {
            exports_fs::Error::NotFound { path } => Self::FileNotFound { path },
            other => Self::Fs(other),
        }
    }
}

impl From<exports_nfsd::Error> for Error {
    fn from(err: exports_nfsd::Error) -> Self {
        Self::SubprocessFailed(err)
    }
}

impl Error {
    /// Attach the target path to a validator rejection.
    pub(crate) fn from_validation(path: PathBuf, err: exports_nfsd::Error) -> Self {
        match err {
            exports_nfsd::Error::ValidationFailed { diagnostics, .. } => {
                Self::ValidationFailed { path, diagnostics }
            }
            other => Self::SubprocessFailed(other),
        }
    }
}
