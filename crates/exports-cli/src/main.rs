//! nfsexports CLI
//!
//! Adds, removes and lists identifier-tagged export blocks in an NFS exports
//! file and reloads nfsd.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let store = context::store_for(&cli)?;

    match cli.command {
        Commands::Add {
            ref identifier,
            ref export,
            reload,
        } => commands::run_add(&store, identifier, export, reload)?,
        Commands::Remove {
            ref identifier,
            reload,
        } => commands::run_remove(&store, identifier, reload)?,
        Commands::Exists { ref identifier } => {
            if !commands::run_exists(&store, identifier)? {
                return Ok(1);
            }
        }
        Commands::List { json } => commands::run_list(&store, json)?,
        Commands::ListAll { json } => commands::run_list_all(&store, json)?,
        Commands::Check => commands::run_check(&store)?,
        Commands::Reload => commands::run_reload(&store)?,
    }

    Ok(0)
}
