//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envista", version, about = "View and edit environment variables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print all environment variables
    List,
    /// Open the interactive table editor
    Edit,
    /// Write the variables to a shell export script
    Save {
        /// Target file; prompted for when omitted
        file: Option<PathBuf>,
    },
    /// Set one environment variable
    Set { name: String, value: String },
    /// Copy the export script to the system clipboard
    Clip,
    /// Report executable-name collisions across a path-group variable
    Conflict { name: String },
    /// Remove duplicate entries from a path-group variable
    Dedup { name: String },
}
