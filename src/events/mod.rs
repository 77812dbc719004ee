//! Event handling for the application.
//!
//! This module polls terminal input and describes the keyboard shortcuts
//! available in each context.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{get_context_hints, KeyContext};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input within the tick rate.
    Tick,
}
