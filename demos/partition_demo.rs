//! Demo walking through a partition session without a terminal UI
//!
//! This example drives the engine directly: it shortlists a few names,
//! narrows the pool with a search, and shows how removal interacts with an
//! active filter.

use shortlist::RosterEngine;

fn print_state(label: &str, engine: &RosterEngine) {
    let sections = engine.sections();

    println!("--- {label} ---");
    println!("Shortlist ({}):", sections.added.len());
    for person in &sections.added {
        println!("  ✓ {person}");
    }
    println!("Available ({}):", sections.available.len());
    for person in &sections.available {
        println!("    {person}");
    }
    println!();
}

fn main() {
    println!("=== Shortlist Partition Demo ===\n");

    let mut engine = RosterEngine::with_default_roster();
    print_state("fresh engine", &engine);

    engine.add("Ruby Mae").expect("Ruby Mae is available");
    engine.add("Jack Ryan").expect("Jack Ryan is available");
    print_state("after shortlisting two names", &engine);

    engine.set_query("rose");
    print_state("searching for 'rose'", &engine);

    // Removing while the filter is active: Jack Ryan goes back to the
    // pool, but stays invisible because he doesn't match "rose".
    engine.remove("Jack Ryan").expect("Jack Ryan is shortlisted");
    print_state("removed Jack Ryan with 'rose' still active", &engine);

    engine.set_query("");
    print_state("filter cleared", &engine);

    match engine.add("Ruby Mae") {
        Ok(_) => println!("unexpected: Ruby Mae was added twice"),
        Err(e) => println!("double-add rejected as expected: {e}"),
    }
}
