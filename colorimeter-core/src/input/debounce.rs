//! Timestamp debounce gate
//!
//! One window shared by every button: a press is accepted when at least
//! `window_ms` have passed since the last accepted press. Releases are
//! passed through untouched and do not restart the window.

use super::ButtonEvent;
use crate::constants::DEBOUNCE_WINDOW_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonDebouncer {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl Default for ButtonDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_MS)
    }
}

impl ButtonDebouncer {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Gate one event; returns it if it should be acted on
    pub fn filter(&mut self, event: ButtonEvent, now_ms: u64) -> Option<ButtonEvent> {
        if !event.pressed {
            return Some(event);
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.window_ms {
                debug!("Debounced {} press", event.button.name());
                return None;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;

    const PRESS: ButtonEvent = ButtonEvent::pressed(Button::Gain);

    #[test]
    fn test_presses_inside_window_collapse() {
        let mut db = ButtonDebouncer::new(600);
        assert_eq!(db.filter(PRESS, 1_000), Some(PRESS));
        assert_eq!(db.filter(PRESS, 1_300), None);
    }

    #[test]
    fn test_presses_outside_window_both_pass() {
        let mut db = ButtonDebouncer::new(600);
        assert!(db.filter(PRESS, 1_000).is_some());
        assert!(db.filter(PRESS, 1_700).is_some());
    }

    #[test]
    fn test_window_boundary_accepts() {
        let mut db = ButtonDebouncer::new(600);
        assert!(db.filter(PRESS, 0).is_some());
        assert!(db.filter(PRESS, 599).is_none());
        assert!(db.filter(PRESS, 600).is_some());
    }

    #[test]
    fn test_dropped_press_does_not_extend_window() {
        let mut db = ButtonDebouncer::new(600);
        assert!(db.filter(PRESS, 0).is_some());
        assert!(db.filter(PRESS, 500).is_none());
        assert!(db.filter(PRESS, 650).is_some());
    }

    #[test]
    fn test_window_is_global() {
        let mut db = ButtonDebouncer::new(600);
        assert!(db.filter(PRESS, 0).is_some());
        assert!(db.filter(ButtonEvent::pressed(Button::Menu), 100).is_none());
    }

    #[test]
    fn test_release_passes_through() {
        let mut db = ButtonDebouncer::new(600);
        let release = ButtonEvent::released(Button::Gain);
        assert!(db.filter(PRESS, 0).is_some());
        assert_eq!(db.filter(release, 10), Some(release));
        assert!(db.filter(PRESS, 20).is_none());
    }
}
