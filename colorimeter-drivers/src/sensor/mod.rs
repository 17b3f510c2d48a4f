//! Light sensor drivers

pub mod pca9546a;
pub mod tsl2591;

pub use pca9546a::{MuxChannel, MuxError};
pub use tsl2591::{Tsl2591, Tsl2591Error};
