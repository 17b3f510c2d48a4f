//! Measure-mode state
//!
//! Rebuilt on each entry into measure mode: the engine for the confirmed
//! kind, the sensor the gain / itime buttons act on, and the blanking status
//! of normalized kinds.

use crate::calibration::{BlankStatus, CalibrationError};
use crate::measurement::{MeasurementEngine, MeasurementKind};
use crate::sensor::SensorId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasureState {
    engine: MeasurementEngine,
    selected: Option<SensorId>,
    blank: Option<BlankStatus>,
}

impl MeasureState {
    /// Enter measure mode for `kind`
    ///
    /// `blank` is the current status of the kind's baseline, or None if the
    /// kind is not normalized.
    pub fn new(kind: MeasurementKind, blank: Option<BlankStatus>) -> Self {
        Self {
            engine: MeasurementEngine::new(kind),
            selected: None,
            blank,
        }
    }

    pub fn engine(&self) -> &MeasurementEngine {
        &self.engine
    }

    pub fn kind(&self) -> MeasurementKind {
        self.engine.kind()
    }

    /// Sensor the gain / itime buttons act on
    pub fn selected_sensor(&self) -> Option<SensorId> {
        self.selected
    }

    /// Advance the selection: none, then each selectable sensor, then none
    pub fn select_next(&mut self) -> Option<SensorId> {
        let choices = self.kind().selectable_sensors();
        self.selected = match self.selected {
            None => choices.first().copied(),
            Some(current) => choices
                .iter()
                .position(|id| *id == current)
                .and_then(|i| choices.get(i + 1))
                .copied(),
        };
        self.selected
    }

    pub fn blank_status(&self) -> Option<BlankStatus> {
        self.blank
    }

    /// Record a normalization outcome
    pub fn record_blank(&mut self, result: Result<f32, CalibrationError>) {
        self.blank = Some(match result {
            Ok(_) => BlankStatus::Blanked,
            Err(e) => BlankStatus::Failed(e),
        });
    }
}
