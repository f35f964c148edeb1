//! The export block store
//!
//! Every operation re-reads the exports file; nothing is cached between
//! calls. Mutations rewrite the whole file, and additions are only written
//! after the validator accepts the complete candidate.

use exports_blocks::{self as blocks, ManagedExports};
use exports_fs::{DEFAULT_FILE_MODE, ExportsPath, MissingFile, read_exports, write_exports};
use exports_nfsd::{NfsdReloader, NfsdValidator, Reloader, Validator};

use crate::error::{Error, Result};
use crate::settings::Settings;

/// What [`ExportStore::ensure`] did, with the resulting file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The block was validated and written.
    Added(Vec<u8>),
    /// A begin marker for the identifier was already there; nothing was written.
    AlreadyPresent(Vec<u8>),
}

impl AddOutcome {
    pub fn was_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    pub fn content(&self) -> &[u8] {
        match self {
            Self::Added(content) | Self::AlreadyPresent(content) => content,
        }
    }

    pub fn into_content(self) -> Vec<u8> {
        match self {
            Self::Added(content) | Self::AlreadyPresent(content) => content,
        }
    }
}

/// Managed export blocks in one exports file.
///
/// # Example
///
/// ```rust,no_run
/// use exports_core::ExportStore;
///
/// let store = ExportStore::new("/etc/exports");
/// store.add("my-vm", "/Users 192.168.64.2 -alldirs -maproot=root")?;
/// store.reload_daemon()?;
/// # Ok::<(), exports_core::Error>(())
/// ```
pub struct ExportStore {
    path: ExportsPath,
    mode: u32,
    validator: Box<dyn Validator>,
    reloader: Box<dyn Reloader>,
}

impl std::fmt::Debug for ExportStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportStore")
            .field("path", &self.path)
            .field("mode", &format_args!("{:o}", self.mode))
            .finish_non_exhaustive()
    }
}

impl ExportStore {
    /// Store for `path` using the default nfsd validator and reloader.
    ///
    /// An empty path selects the system exports file.
    pub fn new(path: impl Into<ExportsPath>) -> Self {
        Self {
            path: path.into(),
            mode: DEFAULT_FILE_MODE,
            validator: Box::new(NfsdValidator::default()),
            reloader: Box::new(NfsdReloader::default()),
        }
    }

    /// Store configured from a settings file.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            path: ExportsPath::new(&settings.exports.file),
            mode: settings.exports.mode,
            validator: Box::new(NfsdValidator::new(settings.nfsd.clone())),
            reloader: Box::new(NfsdReloader::new(settings.nfsd.clone())),
        }
    }

    pub fn with_path(mut self, path: impl Into<ExportsPath>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn with_reloader(mut self, reloader: impl Reloader + 'static) -> Self {
        self.reloader = Box::new(reloader);
        self
    }

    pub fn path(&self) -> &ExportsPath {
        &self.path
    }

    /// Ensure a block for `identifier` exists, returning the resulting content.
    ///
    /// A missing file counts as empty. If the block is already present the
    /// current content is returned and nothing is written, even when
    /// `payload` differs. Otherwise the candidate is validated and written
    /// only if accepted.
    pub fn add(&self, identifier: &str, payload: &str) -> Result<Vec<u8>> {
        self.ensure(identifier, payload).map(AddOutcome::into_content)
    }

    /// Like [`add`](Self::add), but reports whether anything was written.
    ///
    /// Presence is decided by the begin marker line alone, the same check
    /// that keeps `add` idempotent.
    pub fn ensure(&self, identifier: &str, payload: &str) -> Result<AddOutcome> {
        let current = read_exports(&self.path, MissingFile::Empty)?;

        let Some(candidate) = blocks::append_block(&current, identifier, payload) else {
            tracing::debug!(identifier, path = %self.path, "Export already present");
            return Ok(AddOutcome::AlreadyPresent(current));
        };

        self.validator
            .validate(&candidate)
            .map_err(|e| Error::from_validation(self.path.as_path().to_path_buf(), e))?;

        write_exports(&self.path, &candidate, self.mode)?;
        tracing::info!(identifier, path = %self.path, "Added export");
        Ok(AddOutcome::Added(candidate))
    }

    /// Remove the block for `identifier`, returning the resulting content.
    ///
    /// The file must exist. The result is not validated.
    pub fn remove(&self, identifier: &str) -> Result<Vec<u8>> {
        let current = read_exports(&self.path, MissingFile::Error)?;

        let updated = blocks::remove_block(&current, identifier).map_err(|e| match e {
            blocks::Error::BlockNotFound { identifier } => Error::IdentifierNotFound {
                identifier,
                path: self.path.as_path().to_path_buf(),
            },
        })?;

        write_exports(&self.path, &updated, self.mode)?;
        tracing::info!(identifier, path = %self.path, "Removed export");
        Ok(updated)
    }

    /// Check whether both markers for `identifier` are present.
    ///
    /// A missing file is an error, not `false`.
    pub fn exists(&self, identifier: &str) -> Result<bool> {
        let current = read_exports(&self.path, MissingFile::Error)?;
        Ok(blocks::has_block(&current, identifier))
    }

    /// Managed blocks with their single payload line, in document order.
    pub fn list(&self) -> Result<ManagedExports> {
        let current = read_exports(&self.path, MissingFile::Error)?;
        Ok(blocks::parse_managed(&current))
    }

    /// Every non-empty line without a `#`, managed or not.
    pub fn list_all(&self) -> Result<Vec<String>> {
        let current = read_exports(&self.path, MissingFile::Error)?;
        Ok(blocks::parse_all(&current))
    }

    /// Run the validator against the file as it is on disk.
    pub fn check(&self) -> Result<()> {
        let current = read_exports(&self.path, MissingFile::Error)?;
        self.validator
            .validate(&current)
            .map_err(|e| Error::from_validation(self.path.as_path().to_path_buf(), e))
    }

    /// Ask the daemon to re-read its exports.
    pub fn reload_daemon(&self) -> Result<()> {
        self.reloader.reload()?;
        Ok(())
    }
}
