//! Blanking / normalization
//!
//! Establishes a reference baseline reading under known conditions so
//! later readings can be reported relative to it.

pub mod calibrator;

pub use calibrator::{median, BlankStatus, CalibrationError, Calibrator};
