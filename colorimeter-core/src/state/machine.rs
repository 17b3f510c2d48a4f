//! Mode state machine

use super::events::Event;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Live readout of the selected measurement
    Measure,
    /// Measurement selection list
    Menu,
    /// Dismissable message (about, configuration errors)
    Message,
    /// Fatal message; terminal until power cycle
    Abort,
}

impl Mode {
    /// Check if the mode accepts no further input
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::Abort)
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Abort is one-way
            (Abort, _) => Abort,
            (_, Fatal) => Abort,

            (Measure, MenuButton) => Menu,
            (Measure, Recoverable) => Message,

            (Menu, MenuButton) => Measure,
            (Menu, AboutSelected) => Message,
            (Menu, MeasurementSelected) => Measure,
            (Menu, Recoverable) => Message,

            (Message, MenuButton) => Menu,

            // Default: stay in current mode
            _ => self,
        }
    }
}
