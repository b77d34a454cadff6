//! Application state for the terminal frontend
//!
//! Manages all mutable state for the section browser: the combined row
//! list, cursor and scroll position, and query editing.

use crate::roster::Pool;
use crate::ui::traits::FrameView;

/// A renderable row in the combined section list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Name shown on the row (and the key reported on toggle)
    pub name: String,
    /// Which section the row belongs to
    pub pool: Pool,
}

/// Mutable state for the terminal frontend
#[derive(Debug, Default)]
pub struct TuiState {
    /// Rows in render order: shortlist section first, then available
    pub rows: Vec<Row>,
    /// Number of leading rows that belong to the shortlist section
    pub added_len: usize,
    /// Cursor position in `rows`
    pub cursor: usize,
    /// Current search query (mirrors the engine's)
    pub query: String,
    /// Cursor position within the query string (byte index)
    pub query_cursor: usize,
    /// Scroll offset into the available section
    pub scroll_offset: usize,
    /// Height of the visible available-section area (set during render)
    pub visible_height: usize,
}

impl TuiState {
    /// Create empty state
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible_height: 20,
            ..Self::default()
        }
    }

    /// Rebuild rows from a fresh view, keeping the cursor in bounds
    ///
    /// The query is taken over from the view so the editing cursor stays
    /// consistent with what the engine actually stored.
    pub fn sync(&mut self, view: &FrameView) {
        self.rows = view
            .sections
            .added
            .iter()
            .map(|person| Row {
                name: person.name.clone(),
                pool: Pool::Added,
            })
            .chain(view.sections.available.iter().map(|person| Row {
                name: person.name.clone(),
                pool: Pool::Available,
            }))
            .collect();
        self.added_len = view.sections.added.len();

        self.query = view.query.clone();
        self.query_cursor = self.query_cursor.min(self.query.len());
        while !self.query.is_char_boundary(self.query_cursor) {
            self.query_cursor -= 1;
        }

        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
        self.adjust_scroll();
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Jump to first row
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last row
    pub fn jump_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor visible inside the available-section viewport
    ///
    /// Only the available section scrolls; the shortlist section is short
    /// and always fully drawn.
    fn adjust_scroll(&mut self) {
        if self.cursor < self.added_len {
            self.scroll_offset = 0;
            return;
        }

        let avail_cursor = self.cursor - self.added_len;
        if avail_cursor < self.scroll_offset {
            self.scroll_offset = avail_cursor;
        } else if self.visible_height > 0
            && avail_cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = avail_cursor - self.visible_height + 1;
        }
    }

    /// Get the row under the cursor
    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor)
    }

    /// Add a character to the query at the editing cursor
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove the character before the editing cursor
    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev);
            self.query_cursor = prev;
        }
    }

    /// Delete the character under the editing cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    /// Move the editing cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the editing cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }
}
