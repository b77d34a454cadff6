//! Roster module - partitioning a fixed list of names into sections
//!
//! This module holds the data models and business logic behind every
//! shortlist session. It is UI-agnostic: frontends (terminal, scripted)
//! consume the ordered sections it produces and feed user intentions back
//! through the engine operations.
//!
//! # Architecture
//!
//! - `models`: core data types (`Person`, `Sections`, `Pool`)
//! - `engine`: the partition engine and its operations
//! - `seed`: the built-in candidate roster
//! - `source`: loading a roster from a file

pub mod engine;
pub mod models;
pub mod seed;
pub mod source;

pub use engine::{EngineError, RosterEngine};
pub use models::{Person, Pool, Sections};
pub use seed::default_roster;
pub use source::{SourceError, load_roster};
