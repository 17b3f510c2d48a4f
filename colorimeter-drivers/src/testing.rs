//! Fake I2C bus (unit tests only)

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use heapless::Vec;

use crate::sensor::pca9546a::DEFAULT_ADDRESS;
use crate::sensor::tsl2591::{self, reg};

/// Register file for one TSL2591 plus a PCA9546A control byte
pub struct FakeBus {
    pub regs: [u8; 32],
    pub fail: bool,
    /// Last byte written to the switch
    pub selected: Option<u8>,
    pointer: u8,
    writes: Vec<u8, 64>,
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            regs: [0; 32],
            fail: false,
            selected: None,
            pointer: 0,
            writes: Vec::new(),
        }
    }

    /// Number of write operations addressed to `address`
    pub fn writes_to(&self, address: u8) -> usize {
        self.writes.iter().filter(|a| **a == address).count()
    }
}

impl ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), ErrorKind> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let _ = self.writes.push(address);
                    if address == DEFAULT_ADDRESS {
                        self.selected = bytes.first().copied();
                    } else if address == tsl2591::ADDRESS {
                        if let Some(cmd) = bytes.first() {
                            assert_eq!(cmd & reg::COMMAND, reg::COMMAND);
                            self.pointer = cmd & 0x1F;
                        }
                        for (i, b) in bytes.iter().skip(1).enumerate() {
                            self.regs[(self.pointer as usize + i) % 32] = *b;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = self.regs[(self.pointer as usize + i) % 32];
                    }
                }
            }
        }
        Ok(())
    }
}
