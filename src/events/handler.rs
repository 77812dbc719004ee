//! Terminal event polling.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;

/// Default tick rate for the event loop in milliseconds.
const TICK_RATE_MS: u64 = 100;

/// Polls crossterm and converts terminal events into [`Event`]s.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the default tick rate.
    pub fn new() -> Self {
        Self::with_tick_rate(TICK_RATE_MS)
    }

    /// Create a new event handler with a custom tick rate.
    pub fn with_tick_rate(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait for the next event.
    ///
    /// Blocks until input arrives or the tick rate elapses, in which case
    /// `Event::Tick` is returned.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        Ok(translate(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a crossterm event to an application event.
///
/// Only key presses are forwarded; release and repeat events (reported on
/// some platforms) become ticks, as do mouse, focus and paste events.
fn translate(event: CrosstermEvent) -> Event {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        _ => Event::Tick,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    use super::*;

    #[test]
    fn test_default_tick_is_100ms() {
        let handler = EventHandler::default();
        assert_eq!(handler.tick_rate, Duration::from_millis(TICK_RATE_MS));
    }

    #[test]
    fn test_custom_tick() {
        let handler = EventHandler::with_tick_rate(50);
        assert_eq!(handler.tick_rate, Duration::from_millis(50));
    }

    #[test]
    fn test_translate_key_press() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(translate(CrosstermEvent::Key(key)), Event::Key(key));
    }

    #[test]
    fn test_translate_ignores_key_release() {
        let key = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(CrosstermEvent::Key(key)), Event::Tick);
    }

    #[test]
    fn test_translate_resize_and_focus() {
        assert_eq!(translate(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24));
        assert_eq!(translate(CrosstermEvent::FocusLost), Event::Tick);
    }
}
