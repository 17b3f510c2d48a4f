//! Board-agnostic core logic for the colorimeter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (light sensor, ADC)
//! - Gain / integration-time cycling and the sensor controller
//! - Filters (moving-average integrator, battery low-pass)
//! - Blanking / normalization sampling
//! - Measurement kinds and their evaluation
//! - Menu paging, button debouncing
//! - Mode state machine and the top-level controller
//! - Configuration types and JSON validation

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

// This must go first so the logging macros are visible to every module.
mod fmt;

pub mod calibration;
pub mod config;
pub mod constants;
pub mod controller;
pub mod filter;
pub mod input;
pub mod measurement;
pub mod menu;
pub mod sensor;
pub mod state;
pub mod traits;
pub mod view;

pub use controller::{Colorimeter, ModeState};

#[cfg(test)]
mod testing;
