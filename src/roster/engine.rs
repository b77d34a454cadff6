//! Roster partition engine
//!
//! This module implements the core state for shortlist sessions: a fixed
//! master roster, the set of names moved onto the shortlist, and a live
//! search query over the remainder.
//!
//! # Architecture
//!
//! - **`RosterEngine`**: owns the master roster and all mutable session state
//! - **Derived views**: the available section is recomputed from
//!   `(roster, added, query)` on every read instead of being kept in a
//!   parallel structure that could drift out of sync
//! - **Value-keyed removal**: shortlist entries are removed by name, never by
//!   a position computed from section offsets
//!
//! # Workflow
//!
//! ```text
//! Engine Created (roster fixed)
//!     ↓
//! ┌─→ Caller Event?
//! │   ├─ set_query() → refilter available section
//! │   ├─ add()       → move name into the shortlist (appended at the end)
//! │   └─ remove()    → return name to the candidate pool
//! │       ↓
//! └── fresh Sections returned, caller re-renders
//! ```

use crate::roster::models::{Person, Pool, Sections};
use crate::roster::seed;
use std::collections::HashSet;

/// Engine result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by roster operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The named person is not in the pool the operation expects: `add` hit
    /// a name that is already shortlisted (or was never in the roster), or
    /// `remove` hit a name that is not currently shortlisted. The engine
    /// state is unchanged when this is returned.
    #[error("invalid transition: '{name}' is not currently {expected}")]
    InvalidTransition { name: String, expected: Pool },
}

/// Roster partition engine - one instance per session
///
/// All operations are synchronous and complete before returning; the engine
/// has no interior mutability and is meant to be owned by a single
/// controller. Callers that need to share one instance must serialize
/// access themselves.
pub struct RosterEngine {
    /// The fixed candidate roster, in presentation order. Never mutated.
    roster: Vec<Person>,

    /// Names currently on the shortlist (membership lookup)
    added_names: HashSet<String>,

    /// Shortlist entries in the order they were added
    added_order: Vec<Person>,

    /// Live search query, stored verbatim. Case folding happens only at
    /// comparison time.
    query: String,
}

impl RosterEngine {
    /// Create an engine over the given roster
    ///
    /// The shortlist starts empty and the query starts blank.
    #[must_use]
    pub fn new(roster: Vec<Person>) -> Self {
        Self {
            roster,
            added_names: HashSet::new(),
            added_order: Vec::new(),
            query: String::new(),
        }
    }

    /// Create an engine over the built-in roster
    #[must_use]
    pub fn with_default_roster() -> Self {
        Self::new(seed::default_roster())
    }

    /// Replace the search query and return the refreshed partition
    ///
    /// The text is stored as given, with no trimming; an empty string means
    /// no filter. The query only narrows the available section, the
    /// shortlist always shows every added name.
    pub fn set_query(&mut self, text: impl Into<String>) -> Sections {
        self.query = text.into();
        self.sections()
    }

    /// Move a name from the candidate pool onto the shortlist
    ///
    /// The entry is appended at the end of the shortlist regardless of its
    /// roster position or the current query.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] if the name is already
    /// shortlisted or does not appear in the roster at all. Nothing changes
    /// on error.
    pub fn add(&mut self, name: &str) -> Result<Sections> {
        let person = self
            .roster
            .iter()
            .find(|person| person.name == name)
            .filter(|person| !self.added_names.contains(&person.name))
            .cloned()
            .ok_or_else(|| EngineError::InvalidTransition {
                name: name.to_string(),
                expected: Pool::Available,
            })?;

        self.added_names.insert(person.name.clone());
        self.added_order.push(person);
        Ok(self.sections())
    }

    /// Return a shortlisted name to the candidate pool
    ///
    /// Removal is keyed by name. The entry reappears in the available
    /// section only if it matches the current query (or the query is
    /// empty); pool membership and visibility are independent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] if the name is not
    /// currently shortlisted. Nothing changes on error.
    pub fn remove(&mut self, name: &str) -> Result<Sections> {
        if !self.added_names.remove(name) {
            return Err(EngineError::InvalidTransition {
                name: name.to_string(),
                expected: Pool::Added,
            });
        }

        self.added_order.retain(|person| person.name != name);
        Ok(self.sections())
    }

    /// The available section: roster order, minus the shortlist, narrowed
    /// by the current query
    ///
    /// Recomputed on every call; the engine never caches this view.
    #[must_use]
    pub fn available(&self) -> Vec<Person> {
        let needle = self.query.to_lowercase();

        self.roster
            .iter()
            .filter(|person| !self.added_names.contains(&person.name))
            .filter(|person| {
                self.query.is_empty() || person.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// The shortlist, in the order names were added
    #[must_use]
    pub fn added(&self) -> &[Person] {
        &self.added_order
    }

    /// Both sections as one renderable snapshot
    #[must_use]
    pub fn sections(&self) -> Sections {
        Sections {
            added: self.added_order.clone(),
            available: self.available(),
        }
    }

    /// The query as last set
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The full candidate roster, unaffected by shortlisting or search
    #[must_use]
    pub fn roster(&self) -> &[Person] {
        &self.roster
    }

    /// Whether the named person is currently shortlisted
    #[must_use]
    pub fn is_added(&self, name: &str) -> bool {
        self.added_names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{abc_roster, assert_partition_consistent};

    fn abc_engine() -> RosterEngine {
        RosterEngine::new(abc_roster())
    }

    #[test]
    fn test_new_engine_has_everything_available() {
        let engine = abc_engine();

        assert!(engine.added().is_empty());
        assert_eq!(engine.available(), abc_roster());
        assert_eq!(engine.query(), "");
    }

    #[test]
    fn test_add_moves_name_between_sections() {
        let mut engine = abc_engine();

        let sections = engine.add("B").unwrap();

        assert_eq!(sections.added, vec![Person::new("B")]);
        assert_eq!(
            sections.available,
            vec![Person::new("A"), Person::new("C")]
        );
        assert_partition_consistent(&engine);
    }

    #[test]
    fn test_add_twice_fails_and_leaves_state_unchanged() {
        let mut engine = abc_engine();
        engine.add("B").unwrap();
        let before = engine.sections();

        let err = engine.add("B").unwrap_err();

        assert_eq!(
            err,
            EngineError::InvalidTransition {
                name: "B".to_string(),
                expected: Pool::Available,
            }
        );
        assert_eq!(engine.sections(), before);
    }

    #[test]
    fn test_add_unknown_name_fails() {
        let mut engine = abc_engine();

        let err = engine.add("Z").unwrap_err();

        assert_eq!(
            err,
            EngineError::InvalidTransition {
                name: "Z".to_string(),
                expected: Pool::Available,
            }
        );
        assert!(engine.added().is_empty());
    }

    #[test]
    fn test_remove_never_added_fails() {
        let mut engine = abc_engine();

        let err = engine.remove("Z").unwrap_err();

        assert_eq!(
            err,
            EngineError::InvalidTransition {
                name: "Z".to_string(),
                expected: Pool::Added,
            }
        );
    }

    #[test]
    fn test_readd_appends_at_the_end() {
        let mut engine = abc_engine();
        engine.add("A").unwrap();
        engine.add("B").unwrap();
        engine.add("C").unwrap();

        engine.remove("A").unwrap();
        let sections = engine.add("A").unwrap();

        // Re-adding puts the name at the end, not back at its old position.
        assert_eq!(
            sections.added,
            vec![Person::new("B"), Person::new("C"), Person::new("A")]
        );
    }

    #[test]
    fn test_query_filters_available_case_insensitively() {
        let mut engine = RosterEngine::with_default_roster();

        let lower = engine.set_query("ava").available;
        let upper = engine.set_query("AVA").available;

        assert_eq!(lower, upper);
        assert!(lower.iter().any(|person| person.name == "Ava Grace"));
        assert!(lower.iter().all(|person| {
            person.name.to_lowercase().contains("ava")
        }));
    }

    #[test]
    fn test_clearing_query_restores_roster_minus_shortlist() {
        let mut engine = RosterEngine::with_default_roster();
        engine.add("Jack Ryan").unwrap();
        engine.set_query("rose");

        let sections = engine.set_query("");

        let expected: Vec<Person> = engine
            .roster()
            .iter()
            .filter(|person| person.name != "Jack Ryan")
            .cloned()
            .collect();
        assert_eq!(sections.available, expected);
    }

    #[test]
    fn test_query_does_not_narrow_the_shortlist() {
        let mut engine = abc_engine();
        engine.add("A").unwrap();

        let sections = engine.set_query("zzz");

        assert_eq!(sections.added, vec![Person::new("A")]);
        assert!(sections.available.is_empty());
    }

    #[test]
    fn test_remove_under_non_matching_query_stays_hidden() {
        let mut engine = abc_engine();
        engine.add("B").unwrap();
        assert_eq!(
            engine.sections().available,
            vec![Person::new("A"), Person::new("C")]
        );

        let filtered = engine.set_query("c");
        assert_eq!(filtered.available, vec![Person::new("C")]);

        // B returns to the pool but does not match "c", so the visible
        // section is unchanged until the query changes.
        let sections = engine.remove("B").unwrap();
        assert!(sections.added.is_empty());
        assert_eq!(sections.available, vec![Person::new("C")]);

        let cleared = engine.set_query("");
        assert_eq!(cleared.available, abc_roster());
    }

    #[test]
    fn test_sections_stay_disjoint_across_operation_sequences() {
        let mut engine = RosterEngine::with_default_roster();

        engine.add("Lily Rose").unwrap();
        engine.add("Ruby Mae").unwrap();
        assert_partition_consistent(&engine);

        engine.set_query("ja");
        assert_partition_consistent(&engine);

        engine.remove("Lily Rose").unwrap();
        engine.add("Jack Ryan").unwrap();
        assert_partition_consistent(&engine);

        engine.set_query("");
        engine.remove("Ruby Mae").unwrap();
        assert_partition_consistent(&engine);
    }

    #[test]
    fn test_query_is_stored_verbatim() {
        let mut engine = abc_engine();
        engine.set_query("  A ");

        // No trimming: the padded query matches nothing in this roster.
        assert_eq!(engine.query(), "  A ");
        assert!(engine.available().is_empty());
    }

    #[test]
    fn test_is_added_tracks_membership() {
        let mut engine = abc_engine();
        assert!(!engine.is_added("A"));

        engine.add("A").unwrap();
        assert!(engine.is_added("A"));

        engine.remove("A").unwrap();
        assert!(!engine.is_added("A"));
    }
}
