//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// lsishow - LSI storage controller and drive summary.
#[derive(Debug, Parser)]
#[command(name = "lsishow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides $LSISHOW_CONFIG and /etc/lsishow/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// storcli controller index (overrides the config file)
    #[arg(long, global = true)]
    pub controller: Option<u32>,

    /// Mask the first half of serial numbers without asking
    #[arg(long, global = true, conflicts_with = "show_serials")]
    pub hide_serials: bool,

    /// Show serial numbers in full without asking
    #[arg(long, global = true)]
    pub show_serials: bool,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The masking choice made on the command line, if any.
    pub fn serials_choice(&self) -> Option<bool> {
        if self.hide_serials {
            Some(true)
        } else if self.show_serials {
            Some(false)
        } else {
            None
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Collect and print the controller summary (default if no command specified)
    Show,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
