//! Light sensor gain and integration-time levels
//!
//! Both settings are small ordered enumerations. The order is the order the
//! gain / itime buttons step through them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cycle::Level;

/// Analog gain of the light sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gain {
    /// 1x
    Low,
    /// 24.5x
    #[default]
    Med,
    /// 400x
    High,
    /// 9200x
    Max,
}

impl Gain {
    /// Configuration / display name
    pub const fn name(self) -> &'static str {
        match self {
            Gain::Low => "low",
            Gain::Med => "med",
            Gain::High => "high",
            Gain::Max => "max",
        }
    }

    /// Parse a configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// Actual amplification factor
    pub const fn again(self) -> f32 {
        match self {
            Gain::Low => 1.0,
            Gain::Med => 24.5,
            Gain::High => 400.0,
            Gain::Max => 9200.0,
        }
    }
}

impl Level for Gain {
    const ALL: &'static [Self] = &[Gain::Low, Gain::Med, Gain::High, Gain::Max];
}

/// ADC integration time of the light sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegrationTime {
    #[cfg_attr(feature = "serde", serde(rename = "100ms"))]
    Ms100,
    #[cfg_attr(feature = "serde", serde(rename = "200ms"))]
    Ms200,
    #[cfg_attr(feature = "serde", serde(rename = "300ms"))]
    Ms300,
    #[cfg_attr(feature = "serde", serde(rename = "400ms"))]
    Ms400,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "500ms"))]
    Ms500,
    #[cfg_attr(feature = "serde", serde(rename = "600ms"))]
    Ms600,
}

impl IntegrationTime {
    /// Configuration / display name
    pub const fn name(self) -> &'static str {
        match self {
            IntegrationTime::Ms100 => "100ms",
            IntegrationTime::Ms200 => "200ms",
            IntegrationTime::Ms300 => "300ms",
            IntegrationTime::Ms400 => "400ms",
            IntegrationTime::Ms500 => "500ms",
            IntegrationTime::Ms600 => "600ms",
        }
    }

    /// Parse a configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Integration time in milliseconds
    pub const fn millis(self) -> u16 {
        match self {
            IntegrationTime::Ms100 => 100,
            IntegrationTime::Ms200 => 200,
            IntegrationTime::Ms300 => 300,
            IntegrationTime::Ms400 => 400,
            IntegrationTime::Ms500 => 500,
            IntegrationTime::Ms600 => 600,
        }
    }

    /// Register encoding (ATIME field)
    pub const fn index(self) -> u8 {
        (self.millis() / 100 - 1) as u8
    }
}

impl Level for IntegrationTime {
    const ALL: &'static [Self] = &[
        IntegrationTime::Ms100,
        IntegrationTime::Ms200,
        IntegrationTime::Ms300,
        IntegrationTime::Ms400,
        IntegrationTime::Ms500,
        IntegrationTime::Ms600,
    ];
}
