//! Button input
//!
//! Logical button identifiers, edge events and the global debounce gate.

pub mod button;
pub mod debounce;

pub use button::{Button, ButtonEvent};
pub use debounce::ButtonDebouncer;
