//! Search input and match highlighting for the data table.
//!
//! `/` opens the input. While it is open every keystroke edits the text, and
//! the table re-filters on each [`SearchEvent::Edited`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// Style patched onto matched text.
fn match_style() -> Style {
    Style::default()
        .bg(Color::Yellow)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// What a key press did to the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// The text changed.
    Edited,
    /// The input closed and the text stays applied.
    Kept,
    /// The input closed and the text was cleared.
    Dismissed,
}

/// The text typed after `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    open: bool,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start capturing keys. Existing text is kept for editing.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Stop capturing keys and drop the text.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.text.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply a key while the input is open.
    ///
    /// Keys that do nothing (Backspace on empty text, function keys) yield
    /// `None`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchEvent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.dismiss();
                Some(SearchEvent::Dismissed)
            }
            KeyCode::Enter => {
                self.open = false;
                Some(SearchEvent::Kept)
            }
            KeyCode::Backspace => self.text.pop().map(|_| SearchEvent::Edited),
            KeyCode::Char('u') if ctrl => self.erase_all(),
            KeyCode::Char('w') if ctrl => self.erase_word(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.text.push(c);
                Some(SearchEvent::Edited)
            }
            _ => None,
        }
    }

    fn erase_all(&mut self) -> Option<SearchEvent> {
        if self.text.is_empty() {
            return None;
        }
        self.text.clear();
        Some(SearchEvent::Edited)
    }

    /// Remove the last word and the whitespace after it.
    fn erase_word(&mut self) -> Option<SearchEvent> {
        if self.text.is_empty() {
            return None;
        }
        let trimmed = self.text.trim_end().len();
        let cut = self.text[..trimmed]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        self.text.truncate(cut);
        Some(SearchEvent::Edited)
    }
}

/// Highlight matches of `query` inside an already rendered line.
///
/// Spans keep their own style outside the matches. Matching ignores case and
/// never crosses span boundaries.
pub fn highlight_line(line: Line<'static>, query: &str) -> Line<'static> {
    if query.is_empty() {
        return line;
    }
    let needle = query.to_lowercase();

    let mut spans = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        for (segment, hit) in segments(&span.content, &needle) {
            let style = if hit {
                span.style.patch(match_style())
            } else {
                span.style
            };
            spans.push(Span::styled(segment.to_string(), style));
        }
    }
    let mut highlighted = Line::from(spans).style(line.style);
    highlighted.alignment = line.alignment;
    highlighted
}

/// Cut `text` into `(segment, is_match)` pieces. `needle` is lowercase.
///
/// Text whose lowercase form has a different byte length (some non-ASCII
/// letters) is returned whole, since match offsets would not line up.
fn segments<'a>(text: &'a str, needle: &str) -> Vec<(&'a str, bool)> {
    let lowered = text.to_lowercase();
    if needle.is_empty() || lowered.len() != text.len() {
        return vec![(text, false)];
    }

    let mut pieces = Vec::new();
    let mut pos = 0;
    for (start, found) in lowered.match_indices(needle) {
        if start > pos {
            pieces.push((&text[pos..start], false));
        }
        pos = start + found.len();
        pieces.push((&text[start..pos], true));
    }
    if pos < text.len() || pieces.is_empty() {
        pieces.push((&text[pos..], false));
    }
    pieces
}

/// Draw the search line.
///
/// When the input is closed but text is applied, the number of matching rows
/// is shown after it.
pub fn render_search_bar(frame: &mut Frame, area: Rect, input: &SearchInput, matches: usize) {
    if !input.open && input.text.is_empty() {
        return;
    }
    let t = theme();

    let line = if input.open {
        Line::from(vec![
            Span::styled("/", Style::default().fg(t.highlight)),
            Span::raw(input.text.clone()),
        ])
    } else {
        let count = match matches {
            0 => "no matches".to_string(),
            1 => "1 match".to_string(),
            n => format!("{} matches", n),
        };
        Line::from(vec![
            Span::styled(format!("/{}", input.text), t.muted_style()),
            Span::styled(format!("  ({})", count), t.muted_style()),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);

    if input.open {
        let x = area.x + 1 + input.text.chars().count() as u16;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y));
    }
}
