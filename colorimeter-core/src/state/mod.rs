//! Operating modes
//!
//! Mode transitions are a pure function of the current mode and an
//! [`Event`]; the data each mode owns lives in [`measure`] and [`message`]
//! and is rebuilt on every entry.

pub mod events;
pub mod machine;
pub mod measure;
pub mod message;

pub use events::Event;
pub use machine::Mode;
pub use measure::MeasureState;
pub use message::{Message, MessageKind};
