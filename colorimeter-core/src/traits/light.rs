//! Light sensor trait

use crate::sensor::{Gain, IntegrationTime};

/// Trait for two-channel light-to-digital sensors (TSL2591 class)
///
/// Implementations talk to the device; range checking, overflow
/// detection and unit conversion live in
/// [`SensorController`](crate::sensor::SensorController).
pub trait LightSensor {
    /// Bus / device error
    type Error;

    /// Power up and verify the device (ID handshake)
    ///
    /// Called once when the controller is constructed. An error here means
    /// the sensor is missing or unresponsive.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Read both raw ADC channels: (full spectrum, infrared)
    fn raw_channels(&mut self) -> Result<(u16, u16), Self::Error>;

    /// Apply an analog gain setting
    fn set_gain(&mut self, gain: Gain) -> Result<(), Self::Error>;

    /// Apply an integration time setting
    fn set_integration_time(&mut self, itime: IntegrationTime) -> Result<(), Self::Error>;
}
