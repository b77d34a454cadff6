//! Data models for the roster partition core
//!
//! These are pure data structures with no business logic. The engine derives
//! everything else on demand; nothing here caches view state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named entry in the roster
///
/// The name doubles as the unique key: the partition never holds two entries
/// with the same name, and all engine operations address people by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
    pub name: String,
}

impl Person {
    /// Create a new person
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The conceptual bucket a person currently belongs to
///
/// Membership is tracked by the engine; visibility of an available person is
/// a separate concern once a search filter is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Still in the pool of candidates
    Available,

    /// Moved onto the shortlist
    Added,
}

impl Pool {
    /// String form used in error messages and section headers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Added => "added",
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two ordered lists a rendering layer consumes
///
/// Every mutating engine operation returns a fresh `Sections`, so the caller
/// always holds a view that matches current state. `added` preserves the
/// order names were shortlisted in; `available` preserves roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sections {
    pub added: Vec<Person>,
    pub available: Vec<Person>,
}

impl Sections {
    /// Total number of rows across both sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.available.len()
    }

    /// Whether both sections are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.available.is_empty()
    }
}
