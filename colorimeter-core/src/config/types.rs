//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REF_IRRADIANCE_180;
use crate::measurement::MeasurementKind;
use crate::sensor::{Gain, IntegrationTime, SensorId};

/// Maximum length of a configuration value echoed back in an issue
pub const MAX_NAME_LEN: usize = 32;

/// Maximum dropped entries reported from one document
pub const MAX_ISSUES: usize = 8;

/// Per-sensor settings (None = device default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSettings {
    pub gain: Option<Gain>,
    pub integration_time: Option<IntegrationTime>,
}

/// Validated device configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Configuration {
    /// Indexed by [`SensorId::index`]
    pub sensors: [SensorSettings; 2],
    /// Measurement shown at boot (None = first menu entry)
    pub startup: Option<MeasurementKind>,
    /// Reference irradiance for the relative-unit measurement (µW/cm²)
    pub ref_irradiance_180: f32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            sensors: [SensorSettings::default(); 2],
            startup: None,
            ref_irradiance_180: DEFAULT_REF_IRRADIANCE_180,
        }
    }
}

impl Configuration {
    pub fn sensor(&self, id: SensorId) -> &SensorSettings {
        &self.sensors[id.index()]
    }

    pub fn sensor_mut(&mut self, id: SensorId) -> &mut SensorSettings {
        &mut self.sensors[id.index()]
    }

    /// Configured gain, or the device default
    pub fn gain(&self, id: SensorId) -> Gain {
        self.sensor(id).gain.unwrap_or_default()
    }

    /// Configured integration time, or the device default
    pub fn integration_time(&self, id: SensorId) -> IntegrationTime {
        self.sensor(id).integration_time.unwrap_or_default()
    }

    /// Startup measurement, or the first menu entry
    pub fn startup_kind(&self) -> MeasurementKind {
        self.startup.unwrap_or(MeasurementKind::ALL[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.gain(SensorId::S90), Gain::Med);
        assert_eq!(
            config.integration_time(SensorId::S180),
            IntegrationTime::Ms500
        );
        assert_eq!(config.startup_kind(), MeasurementKind::RawCount);
        assert_eq!(config.ref_irradiance_180, 500.0);
    }
}
