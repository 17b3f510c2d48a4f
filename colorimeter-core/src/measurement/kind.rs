//! Measurement variants

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::IRRADIANCE_UNITS;
use crate::sensor::SensorId;

/// Measurement kinds, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasurementKind {
    /// Raw full-spectrum counts from both sensors
    #[cfg_attr(feature = "serde", serde(rename = "Raw Count"))]
    RawCount,
    /// Irradiance from both sensors
    #[cfg_attr(feature = "serde", serde(rename = "Irradiance"))]
    Irradiance,
    /// 90° irradiance scaled by the 180° baseline and reference
    #[cfg_attr(feature = "serde", serde(rename = "Relative Units"))]
    RelativeUnit,
    /// Ratio of 90° to 180° irradiance
    #[cfg_attr(feature = "serde", serde(rename = "Scatter Ratio"))]
    DualSensor,
    /// Raw count, 90° sensor only
    #[cfg_attr(feature = "serde", serde(rename = "Count @90"))]
    Sensor90,
    /// 90° irradiance over its own baseline
    #[cfg_attr(feature = "serde", serde(rename = "Normalized @90"))]
    Sensor90Normalized,
    /// Moving average of 90° counts
    #[cfg_attr(feature = "serde", serde(rename = "Integrated @90"))]
    Sensor90Integrated,
    /// Raw count, 180° sensor only
    #[cfg_attr(feature = "serde", serde(rename = "Count @180"))]
    Sensor180,
    /// 180° irradiance over its own baseline
    #[cfg_attr(feature = "serde", serde(rename = "Normalized @180"))]
    Sensor180Normalized,
}

const BOTH: &[SensorId] = &[SensorId::S90, SensorId::S180];
const ONLY_90: &[SensorId] = &[SensorId::S90];
const ONLY_180: &[SensorId] = &[SensorId::S180];
const NONE: &[SensorId] = &[];

impl MeasurementKind {
    /// All kinds in menu order
    pub const ALL: [MeasurementKind; 9] = [
        MeasurementKind::RawCount,
        MeasurementKind::Irradiance,
        MeasurementKind::RelativeUnit,
        MeasurementKind::DualSensor,
        MeasurementKind::Sensor90,
        MeasurementKind::Sensor90Normalized,
        MeasurementKind::Sensor90Integrated,
        MeasurementKind::Sensor180,
        MeasurementKind::Sensor180Normalized,
    ];

    /// Menu / configuration name
    pub const fn name(self) -> &'static str {
        match self {
            MeasurementKind::RawCount => "Raw Count",
            MeasurementKind::Irradiance => "Irradiance",
            MeasurementKind::RelativeUnit => "Relative Units",
            MeasurementKind::DualSensor => "Scatter Ratio",
            MeasurementKind::Sensor90 => "Count @90",
            MeasurementKind::Sensor90Normalized => "Normalized @90",
            MeasurementKind::Sensor90Integrated => "Integrated @90",
            MeasurementKind::Sensor180 => "Count @180",
            MeasurementKind::Sensor180Normalized => "Normalized @180",
        }
    }

    /// Look up a kind by its menu name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Header label per slot
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            MeasurementKind::RawCount => &["Count @90", "Count @180"],
            MeasurementKind::Irradiance => &["Irradiance @90", "Irradiance @180"],
            MeasurementKind::RelativeUnit => &["Relative Units @90"],
            MeasurementKind::DualSensor => &["Ratio 90/180"],
            MeasurementKind::Sensor90 => &["Count @90"],
            MeasurementKind::Sensor90Normalized => &["Normalized @90"],
            MeasurementKind::Sensor90Integrated => &["Integrated @90"],
            MeasurementKind::Sensor180 => &["Count @180"],
            MeasurementKind::Sensor180Normalized => &["Normalized @180"],
        }
    }

    /// Unit string, if the value has one
    pub const fn units(self) -> Option<&'static str> {
        match self {
            MeasurementKind::Irradiance | MeasurementKind::RelativeUnit => {
                Some(IRRADIANCE_UNITS)
            }
            _ => None,
        }
    }

    /// Sensors whose readings feed this kind (settings are shown for these)
    pub const fn sensors(self) -> &'static [SensorId] {
        match self {
            MeasurementKind::RawCount
            | MeasurementKind::Irradiance
            | MeasurementKind::RelativeUnit
            | MeasurementKind::DualSensor => BOTH,
            MeasurementKind::Sensor90
            | MeasurementKind::Sensor90Normalized
            | MeasurementKind::Sensor90Integrated => ONLY_90,
            MeasurementKind::Sensor180 | MeasurementKind::Sensor180Normalized => ONLY_180,
        }
    }

    /// Sensors the right button can select for gain / itime changes
    pub const fn selectable_sensors(self) -> &'static [SensorId] {
        match self {
            MeasurementKind::RelativeUnit | MeasurementKind::DualSensor => NONE,
            _ => self.sensors(),
        }
    }

    /// Sensor sampled by the norm button, if the kind is normalized
    pub const fn norm_sensor(self) -> Option<SensorId> {
        match self {
            MeasurementKind::RelativeUnit | MeasurementKind::Sensor180Normalized => {
                Some(SensorId::S180)
            }
            MeasurementKind::Sensor90Normalized => Some(SensorId::S90),
            _ => None,
        }
    }

    /// Whether the kind shows a pair of slots
    pub const fn is_pair(self) -> bool {
        matches!(self, MeasurementKind::RawCount | MeasurementKind::Irradiance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in MeasurementKind::ALL {
            assert_eq!(MeasurementKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(MeasurementKind::from_name("Absorbance"), None);
    }

    #[test]
    fn test_label_count_matches_shape() {
        for kind in MeasurementKind::ALL {
            let expected = if kind.is_pair() { 2 } else { 1 };
            assert_eq!(kind.labels().len(), expected, "{:?}", kind);
        }
    }

    #[test]
    fn test_selectable_subset_of_sensors() {
        for kind in MeasurementKind::ALL {
            for id in kind.selectable_sensors() {
                assert!(kind.sensors().contains(id));
            }
        }
        assert!(MeasurementKind::DualSensor.selectable_sensors().is_empty());
    }

    #[test]
    fn test_norm_sensor() {
        assert_eq!(
            MeasurementKind::RelativeUnit.norm_sensor(),
            Some(SensorId::S180)
        );
        assert_eq!(
            MeasurementKind::Sensor90Normalized.norm_sensor(),
            Some(SensorId::S90)
        );
        assert_eq!(MeasurementKind::RawCount.norm_sensor(), None);
    }
}
