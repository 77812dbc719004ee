//! Status chips: colored labels for status-like values.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Visual variant of a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipVariant {
    /// Something being prepared.
    Planning,
    /// Good outcome.
    Success,
    /// Needs attention soon.
    Warning,
    /// Failed, cancelled or overdue.
    Danger,
    /// Finished or inactive.
    Muted,
    /// Currently in progress.
    Running,
    /// Sponsor tiers.
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl ChipVariant {
    /// Pick a variant for a status word.
    ///
    /// Unknown words fall back to [`ChipVariant::Planning`].
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "active" | "success" | "confirmed" | "paid" | "approved" | "received" => {
                ChipVariant::Success
            }
            "pending" | "waiting_approval" | "warning" | "waitlisted" | "review" => {
                ChipVariant::Warning
            }
            "cancelled" | "error" | "danger" | "overdue" | "rejected" => ChipVariant::Danger,
            "completed" | "idle" => ChipVariant::Muted,
            "running" | "in_progress" => ChipVariant::Running,
            "platinum" => ChipVariant::Platinum,
            "gold" => ChipVariant::Gold,
            "silver" => ChipVariant::Silver,
            "bronze" => ChipVariant::Bronze,
            _ => ChipVariant::Planning,
        }
    }

    /// Style for this variant.
    pub fn style(&self) -> Style {
        let base = Style::default();
        match self {
            ChipVariant::Planning => base.fg(Color::Cyan),
            ChipVariant::Success => base.fg(Color::Green),
            ChipVariant::Warning => base.fg(Color::Yellow),
            ChipVariant::Danger => base.fg(Color::Red),
            ChipVariant::Muted => base.fg(Color::DarkGray),
            ChipVariant::Running => base.fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ChipVariant::Platinum => base.fg(Color::White).add_modifier(Modifier::BOLD),
            ChipVariant::Gold => base.fg(Color::LightYellow).add_modifier(Modifier::BOLD),
            ChipVariant::Silver => base.fg(Color::Gray),
            ChipVariant::Bronze => base.fg(Color::Rgb(205, 127, 50)),
        }
    }
}

/// Human-readable label for a status word (`waiting_approval` -> `Waiting approval`).
pub fn status_label(status: &str) -> String {
    let spaced = status.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a status chip as a styled span.
pub fn status_chip(status: &str) -> Span<'static> {
    Span::styled(
        format!("● {}", status_label(status)),
        ChipVariant::for_status(status).style(),
    )
}

/// Render a status chip as a line, for use as a table cell.
pub fn status_chip_line(status: &str) -> Line<'static> {
    Line::from(status_chip(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_for_status() {
        assert_eq!(ChipVariant::for_status("active"), ChipVariant::Success);
        assert_eq!(ChipVariant::for_status("PENDING"), ChipVariant::Warning);
        assert_eq!(ChipVariant::for_status("waiting_approval"), ChipVariant::Warning);
        assert_eq!(ChipVariant::for_status("cancelled"), ChipVariant::Danger);
        assert_eq!(ChipVariant::for_status("completed"), ChipVariant::Muted);
        assert_eq!(ChipVariant::for_status("running"), ChipVariant::Running);
        assert_eq!(ChipVariant::for_status("in_progress"), ChipVariant::Running);
        assert_eq!(ChipVariant::for_status("error"), ChipVariant::Danger);
        assert_eq!(ChipVariant::for_status("idle"), ChipVariant::Muted);
        assert_eq!(ChipVariant::for_status("gold"), ChipVariant::Gold);
        assert_eq!(ChipVariant::for_status("planning"), ChipVariant::Planning);
        assert_eq!(ChipVariant::for_status("whatever"), ChipVariant::Planning);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("waiting_approval"), "Waiting approval");
        assert_eq!(status_label("active"), "Active");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn test_status_chip_span() {
        let span = status_chip("cancelled");
        assert_eq!(span.content, "● Cancelled");
        assert_eq!(span.style.fg, Some(Color::Red));
    }
}
