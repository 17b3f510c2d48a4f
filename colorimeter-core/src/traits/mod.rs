//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod adc;
pub mod light;

pub use adc::AdcReader;
pub use light::LightSensor;
