//! Settings resolution from flags, environment and settings file

use std::path::Path;

use exports_core::{ExportStore, Settings};

use crate::cli::Cli;
use crate::error::Result;

/// Resolve settings: the settings file if given, then `--file` on top.
pub fn resolve_settings(config: Option<&Path>, file: Option<&Path>) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(file) = file {
        settings.exports.file = file.to_path_buf();
    }

    tracing::debug!(?settings, "Resolved settings");
    Ok(settings)
}

/// Build the store the command line asks for.
pub fn store_for(cli: &Cli) -> Result<ExportStore> {
    let settings = resolve_settings(cli.config.as_deref(), cli.file.as_deref())?;
    Ok(ExportStore::from_settings(&settings))
}
