//! Battery sense input
//!
//! The battery is read through a resistor divider on an ADC pin. The core's
//! battery filter expects full-scale 16-bit samples; [`ScaledAdc`] widens a
//! narrower converter (e.g. 12-bit) to that range.

use colorimeter_core::traits::AdcReader;

/// Widen an N-bit ADC to 16 bits
pub struct ScaledAdc<A> {
    adc: A,
    bits: u8,
}

impl<A: AdcReader> ScaledAdc<A> {
    /// `bits` is the converter resolution (1..=16)
    pub fn new(adc: A, bits: u8) -> Self {
        Self {
            adc,
            bits: bits.clamp(1, 16),
        }
    }

    /// Map a raw sample onto 0..=65535
    pub fn scale(&self, raw: u16) -> u16 {
        let max = (1u32 << self.bits) - 1;
        let raw = (raw as u32).min(max);
        (raw * u16::MAX as u32 / max) as u16
    }
}

impl<A: AdcReader> AdcReader for ScaledAdc<A> {
    fn read(&mut self) -> Result<u16, ()> {
        let raw = self.adc.read()?;
        Ok(self.scale(raw))
    }
}
