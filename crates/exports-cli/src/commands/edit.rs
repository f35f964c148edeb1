//! Add and remove commands

use colored::Colorize;

use exports_core::ExportStore;

use crate::error::Result;

/// Run the add command
pub fn run_add(store: &ExportStore, identifier: &str, export: &str, reload: bool) -> Result<()> {
    println!(
        "{} Adding export {} to {}",
        "=>".blue().bold(),
        identifier.cyan(),
        store.path()
    );

    if store.ensure(identifier, export)?.was_added() {
        println!("{} Added export {}.", "OK".green().bold(), identifier.cyan());
    } else {
        println!(
            "{} Export {} is already present.",
            "OK".green().bold(),
            identifier.cyan()
        );
    }

    if reload {
        super::run_reload(store)?;
    }
    Ok(())
}

/// Run the remove command
pub fn run_remove(store: &ExportStore, identifier: &str, reload: bool) -> Result<()> {
    println!(
        "{} Removing export {} from {}",
        "=>".blue().bold(),
        identifier.cyan(),
        store.path()
    );

    store.remove(identifier)?;
    println!("{} Removed export {}.", "OK".green().bold(), identifier.cyan());

    if reload {
        super::run_reload(store)?;
    }
    Ok(())
}
