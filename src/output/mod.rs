//! Output formatting for CLI display
//!
//! This module provides utilities for formatting sections and shortlist
//! entries in the CLI, plus the JSON export used for scripting.

use crate::roster::{Person, Sections};
use colored::Colorize;

/// Format one shortlisted entry for display
#[must_use]
pub fn added_entry(person: &Person, quiet: bool) -> String {
    if quiet {
        person.name.clone()
    } else {
        format!("  {} {}", "✓".green(), person.name)
    }
}

/// Format one available entry for display
#[must_use]
pub fn available_entry(person: &Person, quiet: bool) -> String {
    if quiet {
        person.name.clone()
    } else {
        format!("    {}", person.name)
    }
}

/// Print both sections, with headers unless quiet mode is on
pub fn print_sections(sections: &Sections, quiet: bool) {
    if !quiet {
        println!("{}", format!("Shortlist ({}):", sections.added.len()).bold());
    }
    for person in &sections.added {
        println!("{}", added_entry(person, quiet));
    }

    if !quiet {
        println!(
            "{}",
            format!("Available ({}):", sections.available.len()).bold()
        );
    }
    for person in &sections.available {
        println!("{}", available_entry(person, quiet));
    }
}

/// Serialize sections as pretty JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn sections_to_json(sections: &Sections) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Person;

    #[test]
    fn test_quiet_entries_are_bare_names() {
        let person = Person::new("Ruby Mae");

        assert_eq!(added_entry(&person, true), "Ruby Mae");
        assert_eq!(available_entry(&person, true), "Ruby Mae");
    }

    #[test]
    fn test_loud_entries_carry_the_name() {
        let person = Person::new("Ruby Mae");

        assert!(added_entry(&person, false).contains("Ruby Mae"));
        assert!(available_entry(&person, false).contains("Ruby Mae"));
    }

    #[test]
    fn test_json_export_shape() {
        let sections = Sections {
            added: vec![Person::new("B")],
            available: vec![Person::new("A"), Person::new("C")],
        };

        let json = sections_to_json(&sections).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["added"], serde_json::json!(["B"]));
        assert_eq!(value["available"], serde_json::json!(["A", "C"]));
    }
}
