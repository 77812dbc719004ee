//! Contextual help bar component.
//!
//! Displays context-sensitive keyboard shortcut hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Render a single line of hints for the given context.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext) {
    let line = Line::from(hint_spans(get_context_hints(context)));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split hint text into spans, styling `[key]` segments apart from the
/// descriptions between them.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let key_style = Style::default().fg(t.highlight);
    let text_style = t.muted_style();

    let mut spans = Vec::new();
    let mut rest = hints;
    while let Some(open) = rest.find('[') {
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), text_style));
        }
        rest = &rest[open..];
        // An unclosed bracket is plain text.
        let Some(close) = rest.find(']') else {
            break;
        };
        spans.push(Span::styled(rest[..=close].to_string(), key_style));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }
    spans
}
