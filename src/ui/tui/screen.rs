//! Ratatui frontend implementation
//!
//! Implements the [`Frontend`] trait with a full-screen terminal UI:
//! search bar on top, the shortlist section above the available section
//! (the same order the rows are toggled through), and a one-line help bar.

use super::events::{EventResult, poll_and_handle};
use super::state::TuiState;
use super::theme::Theme;
use crate::ui::error::Result;
use crate::ui::traits::{FrameView, Frontend, RosterEvent};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long one poll cycle waits for input before redrawing
const TICK: Duration = Duration::from_millis(100);

/// Ratatui-based frontend
///
/// The terminal is entered lazily on the first `next_event` call and
/// restored on `close` (or on drop, as a fallback when the session loop
/// bails out early).
pub struct TuiFrontend {
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    state: TuiState,
    theme: Theme,
}

impl TuiFrontend {
    /// Create a new terminal frontend with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            terminal: None,
            state: TuiState::new(),
            theme: Theme::default(),
        }
    }

    /// Set a custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Render one frame
    fn render(frame: &mut Frame, state: &mut TuiState, theme: &Theme) {
        let area = frame.area();

        // The shortlist band grows with its content up to a cap; the
        // available section takes the rest.
        let added_height = state.added_len.clamp(1, 6) as u16 + 2;

        let bands = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Search bar
                Constraint::Length(added_height), // Shortlist section
                Constraint::Min(3),               // Available section
                Constraint::Length(1),            // Help bar
            ])
            .split(area);

        Self::render_search_bar(frame, state, theme, bands[0]);
        Self::render_shortlist(frame, state, theme, bands[1]);
        Self::render_available(frame, state, theme, bands[2]);
        Self::render_help_bar(frame, theme, bands[3]);
    }

    fn render_search_bar(frame: &mut Frame, state: &TuiState, theme: &Theme, area: Rect) {
        let (before, after) = state.query.split_at(state.query_cursor);
        let line = Line::from(vec![
            Span::styled("> ", theme.cursor_style()),
            Span::raw(before.to_string()),
            Span::styled("|", theme.cursor_style()),
            Span::raw(after.to_string()),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Span::styled(" Search ", theme.title_style()));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_shortlist(frame: &mut Frame, state: &TuiState, theme: &Theme, area: Rect) {
        let title = format!(" Shortlist ({}) ", state.added_len);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Span::styled(title, theme.title_style()));

        if state.added_len == 0 {
            let empty = Paragraph::new(Span::styled(" nobody yet ", theme.dim_style())).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = state.rows[..state.added_len]
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let is_cursor = idx == state.cursor;
                Self::row_item(&row.name, is_cursor, true, theme)
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_available(frame: &mut Frame, state: &mut TuiState, theme: &Theme, area: Rect) {
        let available = &state.rows[state.added_len..];
        let title = format!(" Available ({}) ", available.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Span::styled(title, theme.title_style()));

        let inner_height = area.height.saturating_sub(2) as usize;
        state.visible_height = inner_height;

        let start = state.scroll_offset.min(available.len());
        let end = (start + inner_height).min(available.len());

        let items: Vec<ListItem> = available[start..end]
            .iter()
            .enumerate()
            .map(|(visible_idx, row)| {
                let is_cursor = state.added_len + start + visible_idx == state.cursor;
                Self::row_item(&row.name, is_cursor, false, theme)
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn row_item<'a>(name: &'a str, is_cursor: bool, added: bool, theme: &Theme) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let mut spans = vec![
            Span::styled(cursor_char, theme.cursor_style()),
            Span::raw(" "),
        ];

        if added {
            spans.push(Span::styled("✓ ", theme.added_style()));
        }

        if is_cursor {
            spans.push(Span::styled(name, theme.cursor_style()));
        } else {
            spans.push(Span::raw(name));
        }

        ListItem::new(Line::from(spans))
    }

    fn render_help_bar(frame: &mut Frame, theme: &Theme, area: Rect) {
        let hints =
            " ↑/↓ navigate · Enter toggle · type to search · Ctrl+U clear · ESC done · Ctrl+C cancel";
        frame.render_widget(
            Paragraph::new(Span::styled(hints, theme.dim_style())),
            area,
        );
    }
}

impl Default for TuiFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for TuiFrontend {
    fn next_event(&mut self, view: &FrameView) -> Result<RosterEvent> {
        self.state.sync(view);

        if self.terminal.is_none() {
            self.terminal = Some(Self::setup_terminal()?);
        }

        loop {
            let Self {
                terminal,
                state,
                theme,
            } = self;
            if let Some(terminal) = terminal.as_mut() {
                terminal.draw(|frame| Self::render(frame, state, theme))?;
            }

            match poll_and_handle(&mut self.state, TICK)? {
                EventResult::Emit(event) => return Ok(event),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.terminal.take().is_some() {
            Self::cleanup_terminal()?;
        }
        Ok(())
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Best effort: never leave the terminal in raw mode.
        if self.terminal.take().is_some() {
            let _ = Self::cleanup_terminal();
        }
    }
}
