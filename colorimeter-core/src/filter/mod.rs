//! Signal filters
//!
//! Moving-average integration of sensor counts and low-pass filtering of
//! the battery voltage.

pub mod battery;
pub mod integrator;

pub use battery::BatteryMonitor;
pub use integrator::Integrator;
