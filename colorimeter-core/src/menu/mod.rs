//! Measurement selection menu

pub mod navigator;

pub use navigator::MenuNavigator;

use crate::constants::ABOUT_LABEL;
use crate::measurement::MeasurementKind;

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Measurement(MeasurementKind),
    About,
}

impl MenuItem {
    /// Every measurement in menu order, then "About"
    pub const ALL: [MenuItem; 10] = [
        MenuItem::Measurement(MeasurementKind::ALL[0]),
        MenuItem::Measurement(MeasurementKind::ALL[1]),
        MenuItem::Measurement(MeasurementKind::ALL[2]),
        MenuItem::Measurement(MeasurementKind::ALL[3]),
        MenuItem::Measurement(MeasurementKind::ALL[4]),
        MenuItem::Measurement(MeasurementKind::ALL[5]),
        MenuItem::Measurement(MeasurementKind::ALL[6]),
        MenuItem::Measurement(MeasurementKind::ALL[7]),
        MenuItem::Measurement(MeasurementKind::ALL[8]),
        MenuItem::About,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MenuItem::Measurement(kind) => kind.name(),
            MenuItem::About => ABOUT_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_kind_then_about() {
        for (item, kind) in MenuItem::ALL.iter().zip(MeasurementKind::ALL) {
            assert_eq!(*item, MenuItem::Measurement(kind));
        }
        assert_eq!(MenuItem::ALL.last(), Some(&MenuItem::About));
        assert_eq!(MenuItem::About.label(), "About");
    }
}
