//! Row detail view.
//!
//! Shown as a popup when a table row is activated. It lists every column of
//! the row with its rendered value.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::table::{Column, TableRow};
use crate::ui::theme::theme;

/// Action resulting from detail view input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Close the detail view.
    Close,
}

/// One labelled field in the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: String,
    pub value: Line<'static>,
}

/// Popup with the fields of one row.
#[derive(Debug, Default)]
pub struct DetailView {
    title: String,
    fields: Vec<DetailField>,
    visible: bool,
}

impl DetailView {
    /// Create a hidden detail view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `row` using the given columns for labels and rendering.
    pub fn show<T: TableRow>(&mut self, title: impl Into<String>, row: &T, columns: &[Column<T>]) {
        self.title = title.into();
        self.fields = columns
            .iter()
            .map(|column| DetailField {
                label: column.header.clone(),
                value: column.render_cell(row),
            })
            .collect();
        self.visible = true;
    }

    /// Hide the view.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the view is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The popup title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fields shown in the popup.
    pub fn fields(&self) -> &[DetailField] {
        &self.fields
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                self.hide();
                Some(DetailAction::Close)
            }
            _ => None,
        }
    }

    /// Render the popup centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }
        let t = theme();

        let height = (self.fields.len() as u16 + 2).min(area.height);
        let popup = centered_rect(70, height, area);

        let label_width = self
            .fields
            .iter()
            .map(|f| f.label.chars().count())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|field| {
                let mut spans = vec![Span::styled(
                    format!("{:>width$}  ", field.label, width = label_width),
                    t.header_style(),
                )];
                spans.extend(field.value.spans.iter().cloned());
                Line::from(spans)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_focused))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            popup,
        );
    }
}

/// A rectangle `percent_x` wide and `height` tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
