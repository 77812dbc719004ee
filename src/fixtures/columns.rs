//! Column sets for each dataset.

use ratatui::{layout::Constraint, text::Line};

use crate::table::{CellValue, Column};
use crate::ui::components::{status_chip_line, status_label};

use super::types::{Agent, Event, Registration, Speaker, Sponsor, Task, Venue};

fn status_cell<T>(value: &CellValue, _row: &T) -> Line<'static> {
    status_chip_line(value.as_text().unwrap_or_default())
}

/// `speaker_outreach` -> `Speaker outreach`.
fn label_cell<T>(value: &CellValue, _row: &T) -> Line<'static> {
    Line::from(status_label(value.as_text().unwrap_or_default()))
}

fn money(value: &CellValue) -> String {
    match value {
        CellValue::Int(n) => format!("${}", group_thousands(*n)),
        CellValue::Float(n) => format!("${:.2}", n),
        other => other.to_string(),
    }
}

/// Format an integer with thousands separators (`75000` -> `75,000`).
pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Show only the date part of an ISO timestamp.
fn date_only(value: &CellValue) -> String {
    let text = value.to_string();
    text.get(..10).map(str::to_string).unwrap_or(text)
}

/// Columns for the events dataset.
pub fn event_columns() -> Vec<Column<Event>> {
    vec![
        Column::new("name", "Event").sortable().width(Constraint::Fill(3)),
        Column::new("city", "City").sortable().width(Constraint::Fill(2)),
        Column::new("start_date", "Starts")
            .sortable()
            .width(Constraint::Length(12))
            .render(|value, _| Line::from(date_only(value))),
        Column::new("status", "Status")
            .sortable()
            .width(Constraint::Length(20))
            .render(status_cell),
        Column::new("budget_total", "Budget")
            .sortable()
            .width(Constraint::Length(12))
            .render(|value, event: &Event| {
                Line::from(format!("{} {}", money(value), event.currency))
            }),
        Column::new("expected_attendees", "Attendees")
            .sortable()
            .width(Constraint::Length(10)),
    ]
}

/// Columns for the speakers dataset.
pub fn speaker_columns() -> Vec<Column<Speaker>> {
    vec![
        Column::new("name", "Speaker").sortable().width(Constraint::Fill(2)),
        Column::new("topics", "Topics").width(Constraint::Fill(3)),
        Column::new("timezone", "TZ").sortable().width(Constraint::Length(5)),
        Column::new("fee", "Fee")
            .sortable()
            .width(Constraint::Length(10))
            .render(|value, _| Line::from(money(value))),
        Column::new("needs_accommodation", "Hotel")
            .sortable()
            .width(Constraint::Length(6))
            .render(|value, _| {
                Line::from(if value == &CellValue::Bool(true) { "yes" } else { "no" })
            }),
        Column::new("status", "Status")
            .sortable()
            .width(Constraint::Length(14))
            .render(status_cell),
    ]
}

/// Columns for the sponsors dataset.
pub fn sponsor_columns() -> Vec<Column<Sponsor>> {
    vec![
        Column::new("company", "Company").sortable().width(Constraint::Fill(2)),
        Column::new("tier", "Tier")
            .sortable()
            .width(Constraint::Length(12))
            .render(status_cell),
        Column::new("package_value", "Package")
            .sortable()
            .width(Constraint::Length(10))
            .render(|value, _| Line::from(money(value))),
        Column::new("contact", "Contact").width(Constraint::Fill(2)),
        Column::new("deliverables_due", "Due")
            .sortable()
            .width(Constraint::Length(12))
            .render(|value, _| Line::from(date_only(value))),
        Column::new("invoice_status", "Invoice")
            .sortable()
            .width(Constraint::Length(12))
            .render(status_cell),
    ]
}

/// Columns for the venues dataset.
pub fn venue_columns() -> Vec<Column<Venue>> {
    vec![
        Column::new("name", "Venue").sortable().width(Constraint::Fill(2)),
        Column::new("address", "Address").width(Constraint::Fill(3)),
        Column::new("capacity", "Capacity")
            .sortable()
            .width(Constraint::Length(9)),
        Column::new("rooms", "Rooms").sortable().width(Constraint::Length(6)),
        Column::new("daily_rate", "Daily rate")
            .sortable()
            .width(Constraint::Length(11))
            .render(|value, _| Line::from(money(value))),
        Column::new("amenities", "Amenities").width(Constraint::Fill(2)),
    ]
}

/// Columns for the registrations dataset.
pub fn registration_columns() -> Vec<Column<Registration>> {
    vec![
        Column::new("id", "#").sortable().width(Constraint::Length(5)),
        Column::new("attendee", "Attendee").sortable().width(Constraint::Fill(2)),
        Column::new("email", "Email").width(Constraint::Fill(3)),
        Column::new("ticket_type", "Ticket")
            .sortable()
            .width(Constraint::Length(10)),
        Column::new("status", "Status")
            .sortable()
            .width(Constraint::Length(14))
            .render(status_cell),
        Column::new("registered_at", "Registered")
            .sortable()
            .width(Constraint::Length(12))
            .render(|value, _| Line::from(date_only(value))),
        Column::new("amount", "Paid")
            .sortable()
            .width(Constraint::Length(7))
            .render(|value, _| Line::from(money(value))),
    ]
}

/// Columns for the agents dataset.
pub fn agent_columns() -> Vec<Column<Agent>> {
    vec![
        Column::new("type", "Agent")
            .sortable()
            .width(Constraint::Length(20))
            .render(label_cell),
        Column::new("status", "Status")
            .sortable()
            .width(Constraint::Length(20))
            .render(status_cell),
        Column::new("current_task", "Current task").width(Constraint::Fill(3)),
        Column::new("progress", "Progress")
            .sortable()
            .width(Constraint::Length(9))
            .render(|value, _| Line::from(format!("{}%", value))),
        Column::new("decision_count", "Decisions")
            .sortable()
            .width(Constraint::Length(10)),
        Column::new("updated_at", "Updated")
            .sortable()
            .width(Constraint::Length(12))
            .render(|value, _| Line::from(date_only(value))),
    ]
}

/// Columns for the tasks dataset.
pub fn task_columns() -> Vec<Column<Task>> {
    vec![
        Column::new("title", "Task").sortable().width(Constraint::Fill(3)),
        Column::new("agent", "Agent")
            .sortable()
            .width(Constraint::Length(20))
            .render(label_cell),
        Column::new("priority", "Priority")
            .sortable()
            .width(Constraint::Length(10))
            .render(label_cell),
        Column::new("status", "Status")
            .sortable()
            .width(Constraint::Length(16))
            .render(status_cell),
        Column::new("due_date", "Due")
            .sortable()
            .width(Constraint::Length(12))
            .render(|value, _| Line::from(date_only(value))),
        Column::new("dependencies", "Depends on").width(Constraint::Length(11)),
    ]
}
