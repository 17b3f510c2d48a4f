//! TSL2591 light-to-digital converter
//!
//! Two photodiode channels: CH0 sees visible + IR (full spectrum), CH1 IR
//! only. Gain and integration time share the CONTROL register.
//!
//! # Command byte
//!
//! Every register access starts with `COMMAND | register`, where COMMAND
//! selects the normal-operation transaction type.

use colorimeter_core::sensor::{Gain, IntegrationTime};
use colorimeter_core::traits::LightSensor;
use embedded_hal::i2c::I2c;

/// Fixed I2C address
pub const ADDRESS: u8 = 0x29;

/// Expected DEVICE_ID value
pub const DEVICE_ID: u8 = 0x50;

/// TSL2591 register addresses
pub mod reg {
    /// Command bit | normal transaction
    pub const COMMAND: u8 = 0xA0;
    /// Power / ALS enable
    pub const ENABLE: u8 = 0x00;
    /// Gain and integration time
    pub const CONTROL: u8 = 0x01;
    /// Device identification
    pub const ID: u8 = 0x12;
    /// CH0 low byte (CH0 high, CH1 low, CH1 high follow)
    pub const C0DATAL: u8 = 0x14;
}

/// ENABLE register bits
pub mod enable {
    pub const POWER_ON: u8 = 0x01;
    /// ALS enable
    pub const AEN: u8 = 0x02;
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tsl2591Error<E> {
    /// Bus error
    I2c(E),
    /// Something answered at 0x29 with the wrong ID
    WrongDevice(u8),
}

impl<E> From<E> for Tsl2591Error<E> {
    fn from(e: E) -> Self {
        Tsl2591Error::I2c(e)
    }
}

/// CONTROL register gain field
pub const fn gain_bits(gain: Gain) -> u8 {
    match gain {
        Gain::Low => 0x00,
        Gain::Med => 0x10,
        Gain::High => 0x20,
        Gain::Max => 0x30,
    }
}

/// CONTROL register integration-time field (100 ms steps from 0)
pub const fn atime_bits(itime: IntegrationTime) -> u8 {
    itime.index()
}

/// TSL2591 on a (possibly multiplexed) I2C bus
pub struct Tsl2591<I2C> {
    i2c: I2C,
    gain: Gain,
    itime: IntegrationTime,
}

impl<I2C: I2c> Tsl2591<I2C> {
    /// Wrap the bus; nothing is written until [`LightSensor::init`]
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            gain: Gain::default(),
            itime: IntegrationTime::default(),
        }
    }

    fn write_reg(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(ADDRESS, &[reg::COMMAND | register, value])
    }

    fn read_regs(&mut self, register: u8, buf: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c.write_read(ADDRESS, &[reg::COMMAND | register], buf)
    }

    fn write_control(&mut self) -> Result<(), I2C::Error> {
        let value = gain_bits(self.gain) | atime_bits(self.itime);
        self.write_reg(reg::CONTROL, value)
    }

    /// Power on with the ALS running
    pub fn enable(&mut self) -> Result<(), I2C::Error> {
        self.write_reg(reg::ENABLE, enable::POWER_ON | enable::AEN)
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> LightSensor for Tsl2591<I2C> {
    type Error = Tsl2591Error<I2C::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        let mut id = [0u8; 1];
        self.read_regs(reg::ID, &mut id)?;
        if id[0] != DEVICE_ID {
            return Err(Tsl2591Error::WrongDevice(id[0]));
        }
        self.write_control()?;
        self.enable()?;
        Ok(())
    }

    fn raw_channels(&mut self) -> Result<(u16, u16), Self::Error> {
        let mut data = [0u8; 4];
        self.read_regs(reg::C0DATAL, &mut data)?;
        let full = u16::from_le_bytes([data[0], data[1]]);
        let ir = u16::from_le_bytes([data[2], data[3]]);
        Ok((full, ir))
    }

    fn set_gain(&mut self, gain: Gain) -> Result<(), Self::Error> {
        self.gain = gain;
        self.write_control()?;
        Ok(())
    }

    fn set_integration_time(&mut self, itime: IntegrationTime) -> Result<(), Self::Error> {
        self.itime = itime;
        self.write_control()?;
        Ok(())
    }
}
