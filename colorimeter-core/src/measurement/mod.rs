//! Measurement kinds and their evaluation
//!
//! A closed set of measurement variants, each mapping the current sensor
//! and calibrator state to one or two displayable readings.

pub mod engine;
pub mod kind;

pub use engine::{Instruments, MeasurementEngine};
pub use kind::MeasurementKind;

use crate::sensor::SensorError;

/// One displayable slot of a measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Numeric value
    Value(f32),
    /// Underlying sensor saturated
    Overflow,
    /// Normalized kind without a baseline yet
    NotCalibrated,
    /// Sensor stopped responding
    Fault,
}

impl Reading {
    /// Numeric value, if any
    pub fn value(&self) -> Option<f32> {
        match self {
            Reading::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<SensorError> for Reading {
    fn from(e: SensorError) -> Self {
        match e {
            SensorError::Overflow => Reading::Overflow,
            SensorError::Io => Reading::Fault,
        }
    }
}

impl From<Result<f32, SensorError>> for Reading {
    fn from(result: Result<f32, SensorError>) -> Self {
        result.map_or_else(Reading::from, Reading::Value)
    }
}

/// Result of evaluating a measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementValue {
    /// Single-slot kinds
    Single(Reading),
    /// 90° and 180° slots, in that order
    Pair([Reading; 2]),
}

impl MeasurementValue {
    /// Slots in display order
    pub fn slots(&self) -> &[Reading] {
        match self {
            MeasurementValue::Single(r) => core::slice::from_ref(r),
            MeasurementValue::Pair(rs) => rs,
        }
    }
}
