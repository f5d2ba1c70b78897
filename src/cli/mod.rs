//! CLI module for herdscore
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// herdscore - Body-condition scoring along a row of numbered stations
#[derive(Parser, Debug)]
#[command(name = "herdscore")]
#[command(version)]
#[command(about = "Score livestock body condition station by station and export to a spreadsheet")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to this file; the scoring screen logs nowhere else
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Config file (default: <config dir>/herdscore/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory exported workbooks are written to
    #[arg(long, global = true)]
    pub export_dir: Option<PathBuf>,

    /// Number of stations in the row
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_station: Option<u32>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive scoring screen (default)
    Run,

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the allowed scores
    Scores,
}

/// Where log lines go for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Appended to `--log-file`
    File(PathBuf),
    Stderr,
    /// Dropped; the scoring screen owns the terminal
    Off,
}

impl Cli {
    /// Command to run, `run` when none is given
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }

    /// Level used when `RUST_LOG` is unset
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "off"
        } else {
            "error"
        }
    }

    /// The interactive screen draws on the terminal stderr shares, so it
    /// only logs to a file.
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.selected_command()) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Run) => LogTarget::Off,
            (None, _) => LogTarget::Stderr,
        }
    }
}
