//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all locsync
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `sync`: Synchronize target-language script files with the source
//! - `languages`: List the known languages and their metadata
//! - `init`: Initialize locsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Translate directory root (overrides config file)
    #[arg(long)]
    pub translate_root: Option<PathBuf>,

    /// Source language id (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Documents to synchronize (default: config `files`)
    /// Can be specified multiple times: --files Items --files Recipes
    #[arg(long = "files")]
    pub files: Vec<String>,

    /// Languages to synchronize (default: config selection)
    /// Can be specified multiple times: --languages DE --languages FR
    #[arg(long = "languages")]
    pub languages: Vec<String>,

    /// Translation provider (overrides config file)
    #[arg(long)]
    pub provider: Option<String>,

    /// Overlay directory with pre-translated files (overrides config file)
    #[arg(long)]
    pub import_root: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Translate directory root (positional shorthand for --translate-root)
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synchronize target-language script files with the source language
    Sync(SyncCommand),
    /// List the known languages and their metadata
    Languages(LanguagesCommand),
    /// Initialize a new .locsyncrc.json configuration file
    Init,
}
