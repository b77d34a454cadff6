//! Testing utilities for shortlist
//!
//! This module provides fixture rosters and consistency assertions shared
//! by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::roster::{Person, RosterEngine};

/// Roster of three single-letter names, used by partition tests
#[must_use]
pub fn abc_roster() -> Vec<Person> {
    vec![Person::new("A"), Person::new("B"), Person::new("C")]
}

/// Engine over the built-in roster
#[must_use]
pub fn seeded_engine() -> RosterEngine {
    RosterEngine::with_default_roster()
}

/// Assert that the engine's views agree with each other
///
/// Checks that the two sections are disjoint, that every shortlisted entry
/// reports as added, and that the shortlist length matches between views.
///
/// # Panics
///
/// Panics when any of the consistency checks fail.
pub fn assert_partition_consistent(engine: &RosterEngine) {
    let sections = engine.sections();

    for person in &sections.added {
        assert!(
            engine.is_added(&person.name),
            "'{}' is in the added section but not tracked as added",
            person.name
        );
        assert!(
            !sections.available.contains(person),
            "'{}' appears in both sections",
            person.name
        );
    }

    for person in &sections.available {
        assert!(
            !engine.is_added(&person.name),
            "'{}' is in the available section while tracked as added",
            person.name
        );
    }

    assert_eq!(sections.added.len(), engine.added().len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abc_roster_shape() {
        let roster = abc_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[1], Person::new("B"));
    }

    #[test]
    fn test_seeded_engine_starts_clean() {
        let engine = seeded_engine();
        assert!(engine.added().is_empty());
        assert_partition_consistent(&engine);
    }
}
