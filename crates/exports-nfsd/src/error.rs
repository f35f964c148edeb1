//! Error types for nfsd integration

/// Errors that can occur while talking to nfsd
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external program could not be started
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external program exited with a non-zero status
    #[error("{program} failed (exit code {code}): {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    /// The checker rejected the candidate exports
    #[error("Export verification failed (exit code {code}):\n{diagnostics}")]
    ValidationFailed { diagnostics: String, code: i32 },

    /// The candidate could not be staged for the checker
    #[error("Failed to stage candidate exports: {0}")]
    Staging(#[source] std::io::Error),
}

/// Result type alias for nfsd operations
pub type Result<T> = std::result::Result<T, Error>;
