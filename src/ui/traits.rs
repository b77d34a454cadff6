//! Core traits for the UI abstraction layer

use super::error::Result;
use crate::roster::Sections;

/// Snapshot a frontend renders on each cycle
///
/// Carries the two ordered sections plus the live query, which is all a
/// rendering layer needs. How the refresh is drawn (full redraw, diffed
/// rows, animation) is the frontend's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameView {
    /// Current partition, in render order
    pub sections: Sections,
    /// Search query as the engine currently holds it
    pub query: String,
}

impl FrameView {
    /// Create a view for one render cycle
    #[must_use]
    pub const fn new(sections: Sections, query: String) -> Self {
        Self { sections, query }
    }
}

/// A user intention reported by a frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// The search text changed to the contained value
    Search(String),

    /// The named row was actioned; it moves to the other pool
    Toggle(String),

    /// Finish the session, keeping the current shortlist
    Accept,

    /// Abandon the session
    Cancel,
}

/// Trait for interactive frontends
///
/// This trait abstracts away the rendering backend, allowing the ratatui
/// terminal frontend to be swapped for scripted or mock implementations.
/// A frontend is handed a fresh [`FrameView`] after every mutation and
/// blocks until the user produces the next event.
pub trait Frontend {
    /// Present the view and block until the user produces an event
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot be initialized or the
    /// interaction fails.
    fn next_event(&mut self, view: &FrameView) -> Result<RosterEvent>;

    /// Tear down any resources held by the frontend (terminal modes etc.)
    ///
    /// Called once when the session ends, regardless of how it ended.
    ///
    /// # Errors
    ///
    /// Returns an error if teardown fails.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
