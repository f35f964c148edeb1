//! Read-only listing commands

use colored::Colorize;

use exports_core::ExportStore;

use crate::error::Result;

/// Run the exists command, returning whether the block is present
pub fn run_exists(store: &ExportStore, identifier: &str) -> Result<bool> {
    let present = store.exists(identifier)?;
    if present {
        println!("{} Export {} exists.", "OK".green().bold(), identifier.cyan());
    } else {
        println!(
            "{} Export {} not found in {}.",
            "--".yellow().bold(),
            identifier.cyan(),
            store.path()
        );
    }
    Ok(present)
}

/// Run the list command
pub fn run_list(store: &ExportStore, json: bool) -> Result<()> {
    let exports = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&exports)?);
        return Ok(());
    }

    if exports.is_empty() {
        println!("{}", "No managed exports.".dimmed());
        return Ok(());
    }

    let width = exports
        .identifiers()
        .map(|id| id.len())
        .max()
        .unwrap_or(0);
    for export in &exports {
        let identifier = format!("{:<width$}", export.identifier, width = width);
        println!("{}  {}", identifier.green(), export.payload);
    }
    Ok(())
}

/// Run the list-all command
pub fn run_list_all(store: &ExportStore, json: bool) -> Result<()> {
    let lines = store.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }
    Ok(())
}
