//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::SettingField;

/// settings-control: effective settings inspector
///
/// Shows which settings are controlled by the deployment configuration file
/// or by other settings, and persists edits without overriding controllers.
#[derive(Debug, Parser)]
#[command(name = "settings-control")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to the user settings file
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Path to the configuration file (skips location lookup)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for settings-control
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show who controls each setting
    Status {
        /// Settings to inspect (all when omitted)
        #[arg(value_name = "FIELD")]
        fields: Vec<SettingField>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the effective settings
    Effective {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Persist setting edits, skipping controlled settings
    Set {
        /// Assignments in 'KEY=VALUE' form
        #[arg(value_name = "KEY=VALUE", required = true)]
        assignments: Vec<String>,
    },

    /// Write default settings to the settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Generate an example configuration file
    Template {
        /// Output path (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Show where the configuration file is looked up
    Locate,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning parse errors.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this command writes to the settings file.
    #[must_use]
    pub const fn writes_settings(&self) -> bool {
        matches!(self.command, Command::Set { .. } | Command::Init { .. })
    }
}
