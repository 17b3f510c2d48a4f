//! Message payloads for Message / Abort modes

use core::fmt::{self, Write};

use heapless::String;

use crate::constants::{FIRMWARE_VERSION, MAX_MESSAGE_LEN};

/// What produced the message (selects the screen title)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKind {
    About,
    Error,
    Abort,
}

/// Text plus whether the user may dismiss it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    kind: MessageKind,
    text: String<MAX_MESSAGE_LEN>,
}

impl Message {
    /// Firmware version banner
    pub fn about() -> Self {
        Self::new(
            MessageKind::About,
            format_args!("firmware version {}", FIRMWARE_VERSION),
        )
    }

    /// Recoverable error, dismissed with the menu button
    pub fn error(args: fmt::Arguments<'_>) -> Self {
        Self::new(MessageKind::Error, args)
    }

    /// Fatal error, cannot be dismissed
    pub fn abort(args: fmt::Arguments<'_>) -> Self {
        Self::new(MessageKind::Abort, args)
    }

    fn new(kind: MessageKind, args: fmt::Arguments<'_>) -> Self {
        let mut writer = Truncating(String::new());
        // Truncating never reports an error.
        let _ = writer.write_fmt(args);
        Self {
            kind,
            text: writer.0,
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the menu button dismisses this message
    pub fn ok_to_continue(&self) -> bool {
        self.kind != MessageKind::Abort
    }
}

/// Writes as much as fits and silently drops the rest
struct Truncating(String<MAX_MESSAGE_LEN>);

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}
