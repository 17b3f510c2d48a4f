//! Light sensors
//!
//! Setting enumerations, the wrapping gain / itime cursor and the
//! controller that turns raw channel counts into checked readings.

pub mod controller;
pub mod cycle;
pub mod settings;

pub use controller::{SensorController, IRRADIANCE_COEFF, MAX_COUNT, MAX_COUNT_100MS};
pub use cycle::{CyclicIndex, Level};
pub use settings::{Gain, IntegrationTime};

/// Physical sensor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorId {
    /// Scatter sensor at 90° to the light path
    S90,
    /// Transmission sensor at 180° (in line with the source)
    S180,
}

impl SensorId {
    /// Both sensors, in display order
    pub const ALL: [SensorId; 2] = [SensorId::S90, SensorId::S180];

    /// Configuration key suffix (`gain_<key>`, `itime_<key>`)
    pub const fn key(self) -> &'static str {
        match self {
            SensorId::S90 => "sensor_90",
            SensorId::S180 => "sensor_180",
        }
    }

    /// Angle label used in measurement headers
    pub const fn angle(self) -> &'static str {
        match self {
            SensorId::S90 => "90",
            SensorId::S180 => "180",
        }
    }

    /// Index into per-sensor arrays
    pub const fn index(self) -> usize {
        match self {
            SensorId::S90 => 0,
            SensorId::S180 => 1,
        }
    }
}

/// Errors from a checked sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Raw count at or above the saturation ceiling (recoverable)
    Overflow,
    /// Device did not respond (fatal at construction)
    Io,
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorError::Overflow => f.write_str("light sensor reading > max_counts"),
            SensorError::Io => f.write_str("light sensor i/o error"),
        }
    }
}
