//! Button identifiers and edge events

/// Logical buttons on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Gain,
    Itime,
    Norm,
    Menu,
    Right,
    Down,
    Up,
    Left,
}

impl Button {
    /// All buttons, indexed by shift-register key number
    pub const ALL: [Button; 8] = [
        Button::Gain,
        Button::Itime,
        Button::Norm,
        Button::Menu,
        Button::Right,
        Button::Down,
        Button::Up,
        Button::Left,
    ];

    /// Map a shift-register key number to a button
    pub fn from_key(key: u8) -> Option<Self> {
        Self::ALL.get(key as usize).copied()
    }

    /// Shift-register key number
    pub fn key(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Button::Gain => "gain",
            Button::Itime => "itime",
            Button::Norm => "norm",
            Button::Menu => "menu",
            Button::Right => "right",
            Button::Down => "down",
            Button::Up => "up",
            Button::Left => "left",
        }
    }
}

/// One edge from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    /// true on press, false on release
    pub pressed: bool,
}

impl ButtonEvent {
    pub const fn pressed(button: Button) -> Self {
        Self {
            button,
            pressed: true,
        }
    }

    pub const fn released(button: Button) -> Self {
        Self {
            button,
            pressed: false,
        }
    }
}
