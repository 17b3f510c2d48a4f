//! Battery voltage monitor
//!
//! Single-pole low-pass filter over the battery sense ADC:
//! `filtered += alpha * (raw - filtered)`.

use crate::constants::BATTERY_LOWPASS_ALPHA;
use crate::traits::AdcReader;

/// ADC reference voltage
const ADC_VREF: f32 = 3.3;

/// Battery sense resistor divider ratio
const DIVIDER_RATIO: f32 = 2.0;

/// Full-scale ADC count
const ADC_FULL_SCALE: f32 = 65535.0;

/// Low-pass filtered battery voltage
#[derive(Debug, Clone)]
pub struct BatteryMonitor {
    alpha: f32,
    /// Filtered voltage (None until the first reading)
    voltage_lowpass: Option<f32>,
}

impl Default for BatteryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryMonitor {
    /// Create a monitor with the default filter constant
    pub const fn new() -> Self {
        Self::with_alpha(BATTERY_LOWPASS_ALPHA)
    }

    /// Create a monitor with a custom filter constant (0 < alpha <= 1)
    pub const fn with_alpha(alpha: f32) -> Self {
        Self {
            alpha,
            voltage_lowpass: None,
        }
    }

    /// Read the ADC and fold the sample into the filter
    ///
    /// A failed ADC read leaves the filter untouched.
    pub fn update<A: AdcReader>(&mut self, adc: &mut A) {
        if let Ok(count) = adc.read() {
            self.apply(count_to_volts(count));
        }
    }

    /// Fold one voltage sample into the filter
    ///
    /// The first sample seeds the filter directly.
    pub fn apply(&mut self, volts: f32) {
        self.voltage_lowpass = Some(match self.voltage_lowpass {
            Some(filtered) => filtered + self.alpha * (volts - filtered),
            None => volts,
        });
    }

    /// Filtered battery voltage (0.0 before the first reading)
    pub fn voltage_lowpass(&self) -> f32 {
        self.voltage_lowpass.unwrap_or(0.0)
    }
}

/// Convert a 16-bit ADC count to battery volts
pub fn count_to_volts(count: u16) -> f32 {
    count as f32 / ADC_FULL_SCALE * ADC_VREF * DIVIDER_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAdc;

    #[test]
    fn test_first_sample_seeds_filter() {
        let mut monitor = BatteryMonitor::new();
        assert_eq!(monitor.voltage_lowpass(), 0.0);
        monitor.apply(3.7);
        assert_eq!(monitor.voltage_lowpass(), 3.7);
    }

    #[test]
    fn test_lowpass_step() {
        let mut monitor = BatteryMonitor::with_alpha(0.5);
        monitor.apply(4.0);
        monitor.apply(3.0);
        assert!((monitor.voltage_lowpass() - 3.5).abs() < 1e-6);
        monitor.apply(3.0);
        assert!((monitor.voltage_lowpass() - 3.25).abs() < 1e-6);
    }

    #[test]
    fn test_converges_towards_input() {
        let mut monitor = BatteryMonitor::new();
        monitor.apply(4.2);
        for _ in 0..200 {
            monitor.apply(3.6);
        }
        assert!((monitor.voltage_lowpass() - 3.6).abs() < 1e-3);
    }

    #[test]
    fn test_adc_update_and_failure() {
        let mut monitor = BatteryMonitor::new();
        monitor.update(&mut FakeAdc(Some(32768)));
        let v = monitor.voltage_lowpass();
        assert!((v - 3.3).abs() < 0.01);

        monitor.update(&mut FakeAdc(None));
        assert_eq!(monitor.voltage_lowpass(), v);
    }
}
