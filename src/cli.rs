//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for shortlist using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: interactive section browser (default)
//! - **show**: print the partition without opening the browser
//! - **names**: list the active roster
//! - **config**: manage configuration settings
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--roster` flag to point a single invocation at another roster
//! - Command aliases (e.g., `b` for `browse`, `s` for `show`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build a shortlist from a fixed roster of names
#[derive(Parser, Debug)]
#[command(name = "shortlist", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Load the roster from this file instead of the configured source
    #[arg(long = "roster", global = true, value_name = "FILE")]
    pub roster: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the command, defaulting to an interactive browse session
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            add: Vec::new(),
        })
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive section browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search query
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Pre-add names to the shortlist before the session starts
        #[arg(short = 'a', long = "add", value_name = "NAME", num_args = 0..)]
        add: Vec<String>,
    },

    /// Print the partition without opening the browser
    #[command(visible_alias = "s")]
    Show {
        /// Search query to filter the available section
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Names to treat as added
        #[arg(short = 'a', long = "add", value_name = "NAME", num_args = 0..)]
        add: Vec<String>,

        /// Emit the sections as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List the names in the active roster
    Names,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}
