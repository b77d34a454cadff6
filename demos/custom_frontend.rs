//! Example: Custom `Frontend` Implementation
//!
//! This example demonstrates how to drive a shortlist session from a
//! custom frontend by implementing the `Frontend` trait over plain stdin,
//! without any terminal UI machinery.
//!
//! Run with:
//! ```bash
//! cargo run --example custom_frontend
//! ```

use shortlist::RosterEngine;
use shortlist::ui::{BrowseController, FrameView, Frontend, Result as UiResult, RosterEvent};
use std::io::{self, Write};

/// Line-oriented frontend without any screen handling
///
/// Renders both sections as numbered lists and reads commands:
/// a number toggles that row, `/text` searches, `/` clears the search,
/// `done` finishes, `q` cancels.
struct LineFrontend;

impl LineFrontend {
    const fn new() -> Self {
        Self
    }
}

impl Frontend for LineFrontend {
    fn next_event(&mut self, view: &FrameView) -> UiResult<RosterEvent> {
        println!();
        if view.query.is_empty() {
            println!("Shortlist / Available");
        } else {
            println!("Shortlist / Available (filter: '{}')", view.query);
        }
        println!("{}", "─".repeat(40));

        // One combined numbering across both sections, shortlist first.
        let mut idx = 0;
        for person in &view.sections.added {
            idx += 1;
            println!("{idx:3}. ✓ {person}");
        }
        for person in &view.sections.available {
            idx += 1;
            println!("{idx:3}.   {person}");
        }
        if idx == 0 {
            println!("  (no rows match)");
        }

        println!("{}", "─".repeat(40));
        print!("number to toggle, /text to search, done, q > ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input == "q" {
            return Ok(RosterEvent::Cancel);
        }
        if input == "done" {
            return Ok(RosterEvent::Accept);
        }
        if let Some(text) = input.strip_prefix('/') {
            return Ok(RosterEvent::Search(text.to_string()));
        }
        if let Ok(n) = input.parse::<usize>() {
            let added_len = view.sections.added.len();
            if n >= 1 && n <= added_len {
                return Ok(RosterEvent::Toggle(
                    view.sections.added[n - 1].name.clone(),
                ));
            }
            let avail_idx = n.wrapping_sub(added_len + 1);
            if let Some(person) = view.sections.available.get(avail_idx) {
                return Ok(RosterEvent::Toggle(person.name.clone()));
            }
        }

        // Anything unrecognized just re-renders.
        Ok(RosterEvent::Search(view.query.clone()))
    }
}

fn main() {
    println!("=== Custom Frontend Example ===");

    let engine = RosterEngine::with_default_roster();
    let controller = BrowseController::new(engine, LineFrontend::new());

    match controller.run() {
        Ok(Some(outcome)) => {
            println!("\n=== Session Results ===");
            println!("Shortlisted {} name(s):", outcome.added.len());
            for person in &outcome.added {
                println!("  ✓ {person}");
            }
        }
        Ok(None) => {
            println!("\nSession cancelled by user.");
        }
        Err(e) => {
            eprintln!("\nError during session: {e}");
            std::process::exit(1);
        }
    }
}
