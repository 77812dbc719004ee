//! Theme and styling configuration.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color theme for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Highlight color for selected items.
    pub highlight: Color,
    /// Color for borders of focused blocks.
    pub border_focused: Color,
    /// Color for secondary text.
    pub muted: Color,
    /// Color for table headers.
    pub header: Color,
}

impl Theme {
    /// The dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            highlight: Color::Cyan,
            border_focused: Color::Cyan,
            muted: Color::DarkGray,
            header: Color::Yellow,
        }
    }

    /// The light theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            highlight: Color::Blue,
            border_focused: Color::Blue,
            muted: Color::Gray,
            header: Color::Magenta,
        }
    }

    /// Look up a theme by name. Unknown names fall back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                warn!(theme = other, "Unknown theme, using dark");
                Self::dark()
            }
        }
    }

    /// Style for table headers.
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    /// Style for the selected row.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Install the global theme. Later calls are ignored.
pub fn init_theme(name: &str) {
    if THEME.set(Theme::by_name(name)).is_err() {
        warn!("Theme already initialized");
    }
}

/// The active theme (dark until [`init_theme`] is called).
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("light"), Theme::light());
        assert_eq!(Theme::by_name("dark"), Theme::dark());
        assert_eq!(Theme::by_name("neon"), Theme::dark());
    }

    #[test]
    fn test_selected_style_inverts() {
        let theme = Theme::dark();
        let style = theme.selected_style();
        assert_eq!(style.bg, Some(Color::Cyan));
        assert_eq!(style.fg, Some(Color::Black));
    }
}
