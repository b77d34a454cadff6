//! Color theme for the terminal frontend

use ratatui::style::{Color, Modifier, Style};

/// Style palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for the cursor row and focused titles
    pub accent: Color,
    /// Color for shortlisted entries
    pub added: Color,
    /// Color for borders and secondary text
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            added: Color::Green,
            dim: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Style for the row under the cursor
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for shortlisted entries
    #[must_use]
    pub fn added_style(&self) -> Style {
        Style::default().fg(self.added)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Style for section titles
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for hints and secondary text
    #[must_use]
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }
}
