//! ADC channel trait

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read a raw sample scaled to 16 bits (0-65535)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}
