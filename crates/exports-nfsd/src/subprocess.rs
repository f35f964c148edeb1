//! Blocking subprocess execution with captured stderr

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Exit status and diagnostics of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Exit code, `-1` if the process was killed by a signal
    pub code: i32,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run `program` with `args`, waiting for it to exit.
///
/// Stdin is closed and stdout discarded; stderr is captured. Only a failure to
/// launch is an error here, the exit status is left to the caller.
pub fn run_capturing<I, S>(program: impl AsRef<OsStr>, args: I) -> Result<Captured>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    tracing::debug!(command = ?cmd, "Running external command");

    let output = cmd.output().map_err(|source| Error::Spawn {
        program: program.to_string_lossy().into_owned(),
        source,
    })?;

    Ok(Captured {
        code: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        let captured = run_capturing("true", std::iter::empty::<&str>()).unwrap();
        assert!(captured.success());
    }

    #[test]
    fn test_failure_status_and_stderr() {
        let captured = run_capturing("sh", ["-c", "echo broken >&2; exit 3"]).unwrap();
        assert_eq!(captured.code, 3);
        assert_eq!(captured.stderr, "broken");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = run_capturing("/nonexistent/nfsd", ["update"]);
        assert!(matches!(result, Err(Error::Spawn { .. })));
    }
}
