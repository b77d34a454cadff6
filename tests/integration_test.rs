//! Integration tests for shortlist
//!
//! These tests verify end-to-end behavior: full partition sequences over
//! the engine, controller sessions driven by a scripted frontend, roster
//! file loading, and the JSON export consumed by scripts.

use shortlist::roster::{self, Person, RosterEngine};
use shortlist::ui::{BrowseController, MockFrontend, RosterEvent};
use shortlist::{output, Sections};
use std::io::Write;

/// Helper to build an engine over a small fixed roster
fn setup_engine(names: &[&str]) -> RosterEngine {
    RosterEngine::new(names.iter().copied().map(Person::new).collect())
}

fn names_of(people: &[Person]) -> Vec<&str> {
    people.iter().map(|person| person.name.as_str()).collect()
}

#[test]
fn test_full_partition_sequence() {
    let mut engine = setup_engine(&["A", "B", "C"]);

    engine.add("B").unwrap();
    assert_eq!(names_of(&engine.sections().available), vec!["A", "C"]);
    assert_eq!(names_of(engine.added()), vec!["B"]);

    let filtered = engine.set_query("c");
    assert_eq!(names_of(&filtered.available), vec!["C"]);

    // Removing under a non-matching filter keeps the name hidden.
    let sections = engine.remove("B").unwrap();
    assert!(sections.added.is_empty());
    assert_eq!(names_of(&sections.available), vec!["C"]);

    let cleared = engine.set_query("");
    assert_eq!(names_of(&cleared.available), vec!["A", "B", "C"]);
}

#[test]
fn test_default_roster_round_trip() {
    let mut engine = RosterEngine::with_default_roster();
    assert_eq!(engine.roster().len(), 19);

    engine.add("Ava Grace").unwrap();
    engine.add("Scarlett Belle").unwrap();

    let sections = engine.sections();
    assert_eq!(sections.added.len(), 2);
    assert_eq!(sections.available.len(), 17);
    assert_eq!(sections.len(), 19);
}

#[test]
fn test_scripted_session_produces_shortlist() {
    let engine = RosterEngine::with_default_roster();
    let mock = MockFrontend::new(vec![
        RosterEvent::Search("jack".to_string()),
        RosterEvent::Toggle("Jack Ryan".to_string()),
        RosterEvent::Toggle("Jackson Lee".to_string()),
        RosterEvent::Search(String::new()),
        RosterEvent::Toggle("Ruby Mae".to_string()),
        RosterEvent::Toggle("Jack Ryan".to_string()),
        RosterEvent::Accept,
    ]);
    let views = mock.views_handle();

    let outcome = BrowseController::new(engine, mock).run().unwrap().unwrap();

    // Jack Ryan was toggled off again, the other two stay in add order.
    assert_eq!(names_of(&outcome.added), vec!["Jackson Lee", "Ruby Mae"]);

    // While the "jack" filter was active, the shortlisted names left the
    // visible pool one by one.
    let views = views.borrow();
    assert_eq!(
        names_of(&views[1].sections.available),
        vec!["Jack Ryan", "Jackson Lee"]
    );
    assert_eq!(names_of(&views[2].sections.available), vec!["Jackson Lee"]);
    assert!(views[3].sections.available.is_empty());
}

#[test]
fn test_scripted_session_cancel_returns_nothing() {
    let engine = setup_engine(&["A", "B"]);
    let mock = MockFrontend::new(vec![
        RosterEvent::Toggle("A".to_string()),
        RosterEvent::Cancel,
    ]);

    let result = BrowseController::new(engine, mock).run().unwrap();

    assert!(result.is_none());
}

#[test]
fn test_roster_file_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# team roster").unwrap();
    writeln!(file, "Mara Venn").unwrap();
    writeln!(file, "Tomas Hale").unwrap();
    writeln!(file, "Ines Gray").unwrap();
    file.flush().unwrap();

    let roster = roster::load_roster(file.path()).unwrap();
    let mut engine = RosterEngine::new(roster);

    engine.add("Tomas Hale").unwrap();
    let sections = engine.set_query("gray");

    assert_eq!(names_of(&sections.available), vec!["Ines Gray"]);
    assert_eq!(names_of(&sections.added), vec!["Tomas Hale"]);
}

#[test]
fn test_json_export_is_stable_for_scripts() {
    let mut engine = setup_engine(&["A", "B", "C"]);
    engine.add("C").unwrap();
    engine.add("A").unwrap();

    let json = output::sections_to_json(&engine.sections()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["added"], serde_json::json!(["C", "A"]));
    assert_eq!(value["available"], serde_json::json!(["B"]));
}

#[test]
fn test_sections_equality_reflects_state() {
    let mut engine = setup_engine(&["A", "B"]);
    let before: Sections = engine.sections();

    engine.add("A").unwrap();
    engine.remove("A").unwrap();

    // Same membership as before, so the snapshots compare equal.
    assert_eq!(engine.sections(), before);
}

#[test]
fn test_invalid_preconditions_do_not_disturb_state() {
    let mut engine = setup_engine(&["A", "B"]);
    engine.add("A").unwrap();
    let snapshot = engine.sections();

    assert!(engine.add("A").is_err());
    assert!(engine.add("missing").is_err());
    assert!(engine.remove("B").is_err());
    assert!(engine.remove("missing").is_err());

    assert_eq!(engine.sections(), snapshot);
}
