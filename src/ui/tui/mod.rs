//! Terminal frontend built on ratatui
//!
//! - `state`: mutable browser state (rows, cursor, query editing)
//! - `events`: input handling, pure over the state
//! - `screen`: the [`TuiFrontend`] itself (terminal lifecycle + rendering)
//! - `theme`: style palette

pub mod events;
pub mod screen;
pub mod state;
pub mod theme;

pub use screen::TuiFrontend;
pub use theme::Theme;
