//! nfsd-facing commands

use colored::Colorize;

use exports_core::ExportStore;

use crate::error::Result;

/// Run the check command
pub fn run_check(store: &ExportStore) -> Result<()> {
    store.check()?;
    println!("{} {} is valid.", "OK".green().bold(), store.path());
    Ok(())
}

/// Run the reload command
pub fn run_reload(store: &ExportStore) -> Result<()> {
    println!("{} Reloading nfsd", "=>".blue().bold());
    store.reload_daemon()?;
    println!("{} nfsd reloaded.", "OK".green().bold());
    Ok(())
}
