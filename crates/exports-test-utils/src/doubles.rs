//! Validator and reloader stand-ins.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use exports_nfsd::{Error, Reloader, Result, Validator};

/// Accepts every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Validator for AcceptAll {
    fn validate(&self, _candidate: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Rejects every candidate with fixed diagnostics.
#[derive(Debug, Clone)]
pub struct RejectAll {
    pub diagnostics: String,
}

impl RejectAll {
    pub fn new(diagnostics: impl Into<String>) -> Self {
        Self {
            diagnostics: diagnostics.into(),
        }
    }
}

impl Validator for RejectAll {
    fn validate(&self, _candidate: &[u8]) -> Result<()> {
        Err(Error::ValidationFailed {
            diagnostics: self.diagnostics.clone(),
            code: 1,
        })
    }
}

/// Accepts every candidate and keeps a copy of each.
///
/// Clones share the same record, so a test can hand one clone to a store and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingValidator {
    seen: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl RecordingValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates validated so far, as UTF-8 (lossy).
    pub fn candidates(&self) -> Vec<String> {
        self.seen
            .borrow()
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }

    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Validator for RecordingValidator {
    fn validate(&self, candidate: &[u8]) -> Result<()> {
        self.seen.borrow_mut().push(candidate.to_vec());
        Ok(())
    }
}

/// Succeeds and counts reloads. Clones share the count.
#[derive(Debug, Clone, Default)]
pub struct CountingReloader {
    count: Rc<Cell<usize>>,
}

impl CountingReloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl Reloader for CountingReloader {
    fn reload(&self) -> Result<()> {
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}

/// Fails every reload as a non-zero `nfsd update` would.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingReloader;

impl Reloader for FailingReloader {
    fn reload(&self) -> Result<()> {
        Err(Error::CommandFailed {
            program: "nfsd".to_string(),
            code: 1,
            stderr: "nfsd is not running".to_string(),
        })
    }
}
