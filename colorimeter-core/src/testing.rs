//! Host fakes for the hardware traits (unit tests only)

use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::sensor::{Gain, IntegrationTime};
use crate::traits::{AdcReader, LightSensor};

/// Scripted light sensor
///
/// Returns the scripted full-spectrum counts in order, repeating the last
/// one once the script runs out.
pub struct FakeSensor {
    readings: Vec<u16>,
    pos: usize,
    present: bool,
    fail_reads: bool,
    /// Settings writes still accepted (None: unlimited)
    settings_left: Option<usize>,
    pub gain: Option<Gain>,
    pub itime: Option<IntegrationTime>,
}

impl FakeSensor {
    pub fn new(readings: &[u16]) -> Self {
        Self {
            readings: readings.to_vec(),
            pos: 0,
            present: true,
            fail_reads: false,
            settings_left: None,
            gain: None,
            itime: None,
        }
    }

    /// Every channel read fails (sensor dropped off the bus)
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Accept `n` gain / itime writes, then reject the rest
    pub fn rejecting_settings_after(mut self, n: usize) -> Self {
        self.settings_left = Some(n);
        self
    }

    fn accept_setting(&mut self) -> Result<(), ()> {
        match &mut self.settings_left {
            None => Ok(()),
            Some(0) => Err(()),
            Some(n) => {
                *n -= 1;
                Ok(())
            }
        }
    }

    /// A sensor that fails its ID handshake
    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::new(&[])
        }
    }
}

impl LightSensor for FakeSensor {
    type Error = ();

    fn init(&mut self) -> Result<(), ()> {
        if self.present {
            Ok(())
        } else {
            Err(())
        }
    }

    fn raw_channels(&mut self) -> Result<(u16, u16), ()> {
        if self.fail_reads {
            return Err(());
        }
        let value = match self.readings.len() {
            0 => 0,
            len => self.readings[self.pos.min(len - 1)],
        };
        self.pos += 1;
        Ok((value, 0))
    }

    fn set_gain(&mut self, gain: Gain) -> Result<(), ()> {
        self.accept_setting()?;
        self.gain = Some(gain);
        Ok(())
    }

    fn set_integration_time(&mut self, itime: IntegrationTime) -> Result<(), ()> {
        self.accept_setting()?;
        self.itime = Some(itime);
        Ok(())
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Default)]
pub struct CountingDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}

/// ADC returning a fixed value, or failing
pub struct FakeAdc(pub Option<u16>);

impl AdcReader for FakeAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.0.ok_or(())
    }
}
