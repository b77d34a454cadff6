//! Shortlist - build a shortlist from a fixed roster of names
//!
//! This library provides the partition engine behind the shortlist tool:
//! a fixed roster of candidate names, a case-insensitive search over the
//! remaining pool, and operations that move names between the "available"
//! and "added" sections. Frontends render the ordered sections the engine
//! produces; the engine itself never touches a terminal.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod output;
pub mod roster;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShortlistError {
    /// Engine error
    #[error("Engine error: {0}")]
    EngineError(#[from] roster::EngineError),
    /// Roster file error
    #[error("Roster error: {0}")]
    SourceError(#[from] roster::SourceError),
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub use roster::{Person, RosterEngine, Sections};
