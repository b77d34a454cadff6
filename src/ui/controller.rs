//! UI controller for shortlist sessions
//!
//! This module bridges the partition engine and a [`Frontend`]: it runs the
//! session loop, applies user events to the engine, and hands the frontend
//! a fresh view after every mutation.
//!
//! # Workflow
//!
//! ```text
//! ┌─→ Build FrameView from engine state
//! │       ↓
//! │   frontend.next_event(view)
//! │       ↓
//! │   User Event?
//! │   ├─ Search → engine.set_query() → Loop
//! │   ├─ Toggle → engine.add()/remove() → Loop
//! │   ├─ Accept → return shortlist
//! │   └─ Cancel → return None
//! ```

use crate::roster::{Person, RosterEngine};
use crate::ui::error::Result;
use crate::ui::traits::{FrameView, Frontend, RosterEvent};

/// Final result of an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOutcome {
    /// Shortlisted people, in the order they were added
    pub added: Vec<Person>,

    /// Query that was active when the session ended
    pub query: String,
}

/// UI controller - drives a frontend from engine state
pub struct BrowseController<F: Frontend> {
    engine: RosterEngine,
    frontend: F,
}

impl<F: Frontend> BrowseController<F> {
    /// Create a new controller
    ///
    /// # Arguments
    ///
    /// * `engine` - Partition engine holding the session state
    /// * `frontend` - UI adapter implementing the [`Frontend`] trait
    #[must_use]
    pub const fn new(engine: RosterEngine, frontend: F) -> Self {
        Self { engine, frontend }
    }

    /// Run the session loop until the user accepts or cancels
    ///
    /// # Returns
    ///
    /// - `Ok(Some(outcome))` - User finished the session; `outcome` holds
    ///   the shortlist in insertion order
    /// - `Ok(None)` - User cancelled
    /// - `Err(_)` - The frontend failed
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails to render or to report an
    /// event. The frontend is closed before this returns, whatever the
    /// result.
    pub fn run(mut self) -> Result<Option<BrowseOutcome>> {
        let outcome = self.run_loop();
        let closed = self.frontend.close();
        let outcome = outcome?;
        closed?;
        Ok(outcome)
    }

    fn run_loop(&mut self) -> Result<Option<BrowseOutcome>> {
        loop {
            let view = FrameView::new(self.engine.sections(), self.engine.query().to_string());

            match self.frontend.next_event(&view)? {
                RosterEvent::Search(text) => {
                    self.engine.set_query(text);
                }
                RosterEvent::Toggle(name) => self.toggle(&name),
                RosterEvent::Accept => {
                    return Ok(Some(BrowseOutcome {
                        added: self.engine.added().to_vec(),
                        query: self.engine.query().to_string(),
                    }));
                }
                RosterEvent::Cancel => return Ok(None),
            }
        }
    }

    /// Move the named row to the other pool
    ///
    /// The engine rejects invalid moves atomically, so a stale row name
    /// from the frontend is dropped without touching state and the session
    /// keeps running.
    fn toggle(&mut self, name: &str) {
        let _ = if self.engine.is_added(name) {
            self.engine.remove(name)
        } else {
            self.engine.add(name)
        };
    }

    /// Engine accessor for callers that inspect state mid-session
    #[must_use]
    pub const fn engine(&self) -> &RosterEngine {
        &self.engine
    }
}
