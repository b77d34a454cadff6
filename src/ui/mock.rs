//! Mock frontend for testing

use super::error::{Result, UiError};
use super::traits::{FrameView, Frontend, RosterEvent};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Mock frontend that replays a scripted event sequence
///
/// Useful for testing the controller without requiring user interaction.
/// Every view handed to the mock is recorded; `views_handle` gives tests a
/// handle that stays readable after the controller has consumed the mock.
#[derive(Debug, Clone, Default)]
pub struct MockFrontend {
    /// Events still to be replayed, in order
    events: VecDeque<RosterEvent>,
    /// Views observed on each `next_event` call
    seen: Rc<RefCell<Vec<FrameView>>>,
    /// Whether `close` has been called
    closed: Rc<RefCell<bool>>,
}

impl MockFrontend {
    /// Create a mock that replays the given events
    #[must_use]
    pub fn new(events: Vec<RosterEvent>) -> Self {
        Self {
            events: events.into(),
            seen: Rc::new(RefCell::new(Vec::new())),
            closed: Rc::new(RefCell::new(false)),
        }
    }

    /// Create a mock that immediately cancels the session
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(vec![RosterEvent::Cancel])
    }

    /// Handle onto the recorded views
    #[must_use]
    pub fn views_handle(&self) -> Rc<RefCell<Vec<FrameView>>> {
        Rc::clone(&self.seen)
    }

    /// Handle onto the closed flag
    #[must_use]
    pub fn closed_handle(&self) -> Rc<RefCell<bool>> {
        Rc::clone(&self.closed)
    }
}

impl Frontend for MockFrontend {
    fn next_event(&mut self, view: &FrameView) -> Result<RosterEvent> {
        self.seen.borrow_mut().push(view.clone());
        self.events
            .pop_front()
            .ok_or_else(|| UiError::BuildError("no more scripted events".to_string()))
    }

    fn close(&mut self) -> Result<()> {
        *self.closed.borrow_mut() = true;
        Ok(())
    }
}
