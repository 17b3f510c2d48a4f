//! PCA9546A 4-channel I2C switch
//!
//! Both light sensors answer at the same address, so each sits behind its
//! own switch channel. [`MuxChannel`] selects its channel before every
//! transaction, which lets several channels share one bus handle (e.g.
//! through `embedded_hal_bus::i2c::RefCellDevice`).

use embedded_hal::i2c::{ErrorType, I2c, Operation};

/// Default switch address (A0..A2 low)
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Number of downstream channels
pub const NUM_CHANNELS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuxError {
    /// Channel index outside 0..4
    InvalidChannel(u8),
}

/// One downstream channel of the switch
pub struct MuxChannel<I2C> {
    bus: I2C,
    address: u8,
    channel: u8,
}

impl<I2C: I2c> MuxChannel<I2C> {
    pub fn new(bus: I2C, channel: u8) -> Result<Self, MuxError> {
        Self::with_address(bus, DEFAULT_ADDRESS, channel)
    }

    pub fn with_address(
        bus: I2C,
        address: u8,
        channel: u8,
    ) -> Result<Self, MuxError> {
        if channel >= NUM_CHANNELS {
            return Err(MuxError::InvalidChannel(channel));
        }
        Ok(Self {
            bus,
            address,
            channel,
        })
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.bus
    }
}

impl<I2C: I2c> ErrorType for MuxChannel<I2C> {
    type Error = I2C::Error;
}

impl<I2C: I2c> I2c for MuxChannel<I2C> {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.bus.write(self.address, &[1 << self.channel])?;
        self.bus.transaction(address, operations)
    }
}
