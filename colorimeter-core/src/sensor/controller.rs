//! Sensor controller
//!
//! Wraps one physical light sensor. Owns the gain and integration-time
//! cursors so button presses and configuration share one source of truth.

use super::cycle::CyclicIndex;
use super::settings::{Gain, IntegrationTime};
use super::{SensorError, SensorId};
use crate::traits::LightSensor;

/// Saturation ceiling with the 100 ms integration time (0x8FFF)
pub const MAX_COUNT_100MS: u16 = 36863;

/// Saturation ceiling for every other integration time (0xFFFF)
pub const MAX_COUNT: u16 = 65535;

/// Irradiance per count (µW/cm²) at 1 ms integration and 1x gain
pub const IRRADIANCE_COEFF: f32 = 100.0 * 400.0 / 264.1;

/// Checked access to one light sensor
pub struct SensorController<S> {
    device: S,
    id: SensorId,
    gain: CyclicIndex<Gain>,
    itime: CyclicIndex<IntegrationTime>,
}

impl<S: LightSensor> SensorController<S> {
    /// Initialize the device and apply the starting settings
    ///
    /// Fails with [`SensorError::Io`] if the handshake or the initial
    /// configuration writes fail.
    pub fn new(
        mut device: S,
        id: SensorId,
        gain: Gain,
        itime: IntegrationTime,
    ) -> Result<Self, SensorError> {
        device.init().map_err(|_| {
            error!("Sensor {}: init failed", id);
            SensorError::Io
        })?;
        device.set_gain(gain).map_err(|_| SensorError::Io)?;
        device
            .set_integration_time(itime)
            .map_err(|_| SensorError::Io)?;

        info!("Sensor {}: gain={} itime={}", id, gain.name(), itime.name());

        Ok(Self {
            device,
            id,
            gain: CyclicIndex::seeded(gain),
            itime: CyclicIndex::seeded(itime),
        })
    }

    /// Current gain
    pub fn gain(&self) -> Gain {
        self.gain.current()
    }

    /// Current integration time
    pub fn integration_time(&self) -> IntegrationTime {
        self.itime.current()
    }

    /// Step to the next gain level (wrapping)
    ///
    /// The cursor only moves if the device accepted the new setting.
    pub fn next_gain(&mut self) -> Result<Gain, SensorError> {
        let mut next = self.gain;
        let gain = next.advance();
        self.device.set_gain(gain).map_err(|_| SensorError::Io)?;
        self.gain = next;
        debug!("Sensor {}: gain -> {}", self.id, gain.name());
        Ok(gain)
    }

    /// Step to the next integration time (wrapping)
    pub fn next_integration_time(&mut self) -> Result<IntegrationTime, SensorError> {
        let mut next = self.itime;
        let itime = next.advance();
        self.device
            .set_integration_time(itime)
            .map_err(|_| SensorError::Io)?;
        self.itime = next;
        debug!("Sensor {}: itime -> {}", self.id, itime.name());
        Ok(itime)
    }

    /// Saturation ceiling for the current integration time
    ///
    /// The 100 ms setting saturates lower than all the others.
    pub fn max_counts(&self) -> u16 {
        match self.integration_time() {
            IntegrationTime::Ms100 => MAX_COUNT_100MS,
            _ => MAX_COUNT,
        }
    }

    /// Integration time in milliseconds as used by the irradiance formula
    pub fn atime_ms(&self) -> f32 {
        self.integration_time().millis() as f32
    }

    /// Full-spectrum channel count
    ///
    /// Returns [`SensorError::Overflow`] when the count is at or above
    /// [`max_counts`](Self::max_counts).
    pub fn raw_count(&mut self) -> Result<u16, SensorError> {
        let (full, _ir) = self.device.raw_channels().map_err(|_| SensorError::Io)?;
        if full >= self.max_counts() {
            return Err(SensorError::Overflow);
        }
        Ok(full)
    }

    /// Irradiance in µW/cm², normalized by gain and integration time
    pub fn irradiance(&mut self) -> Result<f32, SensorError> {
        let count = self.raw_count()?;
        Ok(self.counts_to_irradiance(count))
    }

    /// Convert a count at the current settings to irradiance
    pub fn counts_to_irradiance(&self, count: u16) -> f32 {
        count as f32 / (self.gain().again() * self.atime_ms()) * IRRADIANCE_COEFF
    }

    /// Release the underlying device
    pub fn release(self) -> S {
        self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSensor;

    fn controller(readings: &[u16], itime: IntegrationTime) -> SensorController<FakeSensor> {
        SensorController::new(FakeSensor::new(readings), SensorId::S90, Gain::Med, itime).unwrap()
    }

    #[test]
    fn test_overflow_at_ceiling_100ms() {
        let mut sensor = controller(&[36863, 36862], IntegrationTime::Ms100);
        assert_eq!(sensor.max_counts(), 36863);
        assert_eq!(sensor.raw_count(), Err(SensorError::Overflow));
        assert_eq!(sensor.raw_count(), Ok(36862));
    }

    #[test]
    fn test_ceiling_other_itimes() {
        let mut sensor = controller(&[40000, 65535], IntegrationTime::Ms200);
        assert_eq!(sensor.max_counts(), MAX_COUNT);
        assert_eq!(sensor.raw_count(), Ok(40000));
        assert_eq!(sensor.raw_count(), Err(SensorError::Overflow));
    }

    #[test]
    fn test_init_failure_is_io_error() {
        let result = SensorController::new(
            FakeSensor::missing(),
            SensorId::S180,
            Gain::Med,
            IntegrationTime::Ms500,
        );
        assert!(matches!(result, Err(SensorError::Io)));
    }

    #[test]
    fn test_configured_settings_applied() {
        let sensor = SensorController::new(
            FakeSensor::new(&[0]),
            SensorId::S90,
            Gain::High,
            IntegrationTime::Ms300,
        )
        .unwrap();
        assert_eq!(sensor.gain(), Gain::High);
        assert_eq!(sensor.integration_time(), IntegrationTime::Ms300);
        let device = sensor.release();
        assert_eq!(device.gain, Some(Gain::High));
        assert_eq!(device.itime, Some(IntegrationTime::Ms300));
    }

    #[test]
    fn test_next_gain_follows_configured_value() {
        let mut sensor = controller(&[0], IntegrationTime::Ms500);
        assert_eq!(sensor.next_gain(), Ok(Gain::High));
        assert_eq!(sensor.next_gain(), Ok(Gain::Max));
        assert_eq!(sensor.next_gain(), Ok(Gain::Low));
        assert_eq!(sensor.gain(), Gain::Low);
    }

    #[test]
    fn test_next_itime_changes_ceiling() {
        let mut sensor = controller(&[0], IntegrationTime::Ms600);
        assert_eq!(sensor.next_integration_time(), Ok(IntegrationTime::Ms100));
        assert_eq!(sensor.max_counts(), MAX_COUNT_100MS);
    }

    #[test]
    fn test_irradiance_conversion() {
        let mut sensor = controller(&[2450], IntegrationTime::Ms100);
        // 2450 / (24.5 * 100) = 1 count per (1x, 1ms)
        let irr = sensor.irradiance().unwrap();
        assert!((irr - IRRADIANCE_COEFF).abs() < 1e-3);
    }

    #[test]
    fn test_irradiance_overflow() {
        let mut sensor = controller(&[65535], IntegrationTime::Ms500);
        assert_eq!(sensor.irradiance(), Err(SensorError::Overflow));
    }
}
