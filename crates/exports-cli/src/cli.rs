//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// nfsexports - Manage identifier-tagged blocks in an NFS exports file
#[derive(Parser, Debug)]
#[command(name = "nfsexports")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Exports file to operate on (default: /etc/exports)
    #[arg(short, long, global = true, env = "NFSEXPORTS_FILE")]
    pub file: Option<PathBuf>,

    /// Settings file (.toml or .json)
    #[arg(short, long, global = true, env = "NFSEXPORTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add an export block, validating the result with nfsd
    ///
    /// Does nothing if a block with the identifier already exists.
    ///
    /// Examples:
    ///   nfsexports add my-vm "/Users 192.168.64.2 -alldirs -maproot=root"
    ///   nfsexports add my-vm "/Users 192.168.64.2 -alldirs" --reload
    Add {
        /// Identifier naming the block
        identifier: String,

        /// Export line placed inside the block
        export: String,

        /// Reload nfsd after writing
        #[arg(long)]
        reload: bool,
    },

    /// Remove an export block
    Remove {
        /// Identifier naming the block
        identifier: String,

        /// Reload nfsd after writing
        #[arg(long)]
        reload: bool,
    },

    /// Check whether an export block exists (exit status 1 if not)
    Exists {
        /// Identifier naming the block
        identifier: String,
    },

    /// List export blocks managed by this tool
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every export line in the file, managed or not
    ListAll {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate the exports file as it is on disk
    Check,

    /// Reload nfsd
    Reload,
}
