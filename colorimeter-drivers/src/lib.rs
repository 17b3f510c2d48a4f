//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in colorimeter-core:
//!
//! - Light sensor (TSL2591 over I2C)
//! - I2C multiplexer channel (PCA9546A), since both sensors share one address
//! - Battery sense ADC scaling

#![no_std]
#![deny(unsafe_code)]

pub mod battery;
pub mod sensor;

#[cfg(test)]
mod testing;
