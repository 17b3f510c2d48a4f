//! Measurement evaluation
//!
//! [`Instruments`] is the process-lifetime hardware side (both sensor
//! controllers, their calibrators and the integrator). A
//! [`MeasurementEngine`] is built on entry to measure mode and maps the
//! instruments to a [`MeasurementValue`] once per tick.

use embedded_hal::delay::DelayNs;

use super::{MeasurementKind, MeasurementValue, Reading};
use crate::calibration::{CalibrationError, Calibrator};
use crate::constants::{INTEGRATOR_LEN, NORM_SAMPLE_DELAY_MS, NUM_NORM_SAMPLES};
use crate::filter::Integrator;
use crate::sensor::{SensorController, SensorError, SensorId};
use crate::traits::LightSensor;

/// Sensors, calibrators and integrator shared by every measurement
pub struct Instruments<S> {
    sensors: [SensorController<S>; 2],
    calibrators: [Calibrator; 2],
    integrator: Integrator<INTEGRATOR_LEN>,
}

impl<S: LightSensor> Instruments<S> {
    /// Bundle both sensors
    ///
    /// The 180° calibrator carries the reference irradiance used by the
    /// relative-unit measurement; the 90° one normalizes to 1.
    pub fn new(
        sensor_90: SensorController<S>,
        sensor_180: SensorController<S>,
        ref_irradiance_180: f32,
    ) -> Self {
        Self {
            sensors: [sensor_90, sensor_180],
            calibrators: [Calibrator::new(1.0), Calibrator::new(ref_irradiance_180)],
            integrator: Integrator::new(),
        }
    }

    pub fn sensor(&self, id: SensorId) -> &SensorController<S> {
        &self.sensors[id.index()]
    }

    pub fn sensor_mut(&mut self, id: SensorId) -> &mut SensorController<S> {
        &mut self.sensors[id.index()]
    }

    pub fn calibrator(&self, id: SensorId) -> &Calibrator {
        &self.calibrators[id.index()]
    }

    pub fn integrator(&self) -> &Integrator<INTEGRATOR_LEN> {
        &self.integrator
    }

    /// Run a normalization sample on one sensor's irradiance
    ///
    /// Blocks for `NUM_NORM_SAMPLES * NORM_SAMPLE_DELAY_MS`.
    pub fn normalize<D: DelayNs>(
        &mut self,
        id: SensorId,
        delay: &mut D,
    ) -> Result<f32, CalibrationError> {
        let sensor = &mut self.sensors[id.index()];
        let calibrator = &mut self.calibrators[id.index()];
        calibrator.sample(
            || sensor.irradiance(),
            NUM_NORM_SAMPLES,
            delay,
            NORM_SAMPLE_DELAY_MS,
        )
    }

    fn raw(&mut self, id: SensorId) -> Reading {
        self.sensor_mut(id).raw_count().map(f32::from).into()
    }

    fn irradiance(&mut self, id: SensorId) -> Result<f32, SensorError> {
        self.sensor_mut(id).irradiance()
    }

    /// Irradiance over the sensor's own baseline
    fn normalized(&mut self, id: SensorId) -> Reading {
        if !self.calibrator(id).is_blanked() {
            return Reading::NotCalibrated;
        }
        match self.irradiance(id) {
            Ok(v) => self
                .calibrator(id)
                .normalize(v)
                .map_or(Reading::NotCalibrated, Reading::Value),
            Err(e) => e.into(),
        }
    }
}

/// Evaluator for the active measurement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementEngine {
    kind: MeasurementKind,
}

impl MeasurementEngine {
    pub const fn new(kind: MeasurementKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> MeasurementKind {
        self.kind
    }

    /// Read the sensors and compute the displayable value
    ///
    /// Overflow in one slot of a pair never prevents reading the other.
    pub fn evaluate<S: LightSensor>(&self, inst: &mut Instruments<S>) -> MeasurementValue {
        use MeasurementKind::*;
        use SensorId::*;

        match self.kind {
            RawCount => MeasurementValue::Pair([inst.raw(S90), inst.raw(S180)]),
            Irradiance => MeasurementValue::Pair([
                inst.irradiance(S90).into(),
                inst.irradiance(S180).into(),
            ]),
            RelativeUnit => {
                let reading = if inst.calibrator(S180).is_blanked() {
                    match inst.irradiance(S90) {
                        Ok(v) => inst
                            .calibrator(S180)
                            .relative(v)
                            .map_or(Reading::NotCalibrated, Reading::Value),
                        Err(e) => e.into(),
                    }
                } else {
                    Reading::NotCalibrated
                };
                MeasurementValue::Single(reading)
            }
            DualSensor => {
                let v90 = inst.irradiance(S90);
                let v180 = inst.irradiance(S180);
                MeasurementValue::Single(ratio(v90, v180))
            }
            Sensor90 => MeasurementValue::Single(inst.raw(S90)),
            Sensor90Normalized => MeasurementValue::Single(inst.normalized(S90)),
            Sensor90Integrated => {
                let reading = match inst.sensor_mut(S90).raw_count() {
                    Ok(count) => {
                        inst.integrator.push(f32::from(count));
                        Reading::Value(inst.integrator.value())
                    }
                    Err(e) => e.into(),
                };
                MeasurementValue::Single(reading)
            }
            Sensor180 => MeasurementValue::Single(inst.raw(S180)),
            Sensor180Normalized => MeasurementValue::Single(inst.normalized(S180)),
        }
    }

    /// Run the norm-button action for this kind
    ///
    /// Returns `None` when the kind has no baseline to sample.
    pub fn normalize<S: LightSensor, D: DelayNs>(
        &self,
        inst: &mut Instruments<S>,
        delay: &mut D,
    ) -> Option<Result<f32, CalibrationError>> {
        let id = self.kind.norm_sensor()?;
        Some(inst.normalize(id, delay))
    }
}

/// 90°/180° irradiance ratio
fn ratio(v90: Result<f32, SensorError>, v180: Result<f32, SensorError>) -> Reading {
    match (v90, v180) {
        (Err(SensorError::Io), _) | (_, Err(SensorError::Io)) => Reading::Fault,
        (Err(_), _) | (_, Err(_)) => Reading::Overflow,
        (Ok(_), Ok(d)) if d == 0.0 => Reading::NotCalibrated,
        (Ok(n), Ok(d)) => Reading::Value(n / d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{Gain, IntegrationTime, MAX_COUNT_100MS};
    use crate::testing::{CountingDelay, FakeSensor};

    fn instruments(c90: &[u16], c180: &[u16]) -> Instruments<FakeSensor> {
        instruments_with(c90, c180, IntegrationTime::Ms500)
    }

    fn instruments_with(
        c90: &[u16],
        c180: &[u16],
        itime: IntegrationTime,
    ) -> Instruments<FakeSensor> {
        instruments_from(FakeSensor::new(c90), FakeSensor::new(c180), itime)
    }

    fn instruments_from(
        f90: FakeSensor,
        f180: FakeSensor,
        itime: IntegrationTime,
    ) -> Instruments<FakeSensor> {
        let s90 = SensorController::new(f90, SensorId::S90, Gain::Low, itime).unwrap();
        let s180 = SensorController::new(f180, SensorId::S180, Gain::Low, itime).unwrap();
        Instruments::new(s90, s180, 500.0)
    }

    fn single(value: MeasurementValue) -> Reading {
        match value {
            MeasurementValue::Single(r) => r,
            other => panic!("expected single, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_count_pair() {
        let mut inst = instruments(&[100], &[200]);
        let engine = MeasurementEngine::new(MeasurementKind::RawCount);
        assert_eq!(
            engine.evaluate(&mut inst),
            MeasurementValue::Pair([Reading::Value(100.0), Reading::Value(200.0)])
        );
    }

    #[test]
    fn test_overflow_in_one_slot_keeps_other() {
        let mut inst = instruments_with(&[MAX_COUNT_100MS], &[1234], IntegrationTime::Ms100);
        let engine = MeasurementEngine::new(MeasurementKind::RawCount);
        assert_eq!(
            engine.evaluate(&mut inst),
            MeasurementValue::Pair([Reading::Overflow, Reading::Value(1234.0)])
        );
    }

    #[test]
    fn test_read_failure_is_fault_in_its_slot() {
        let mut inst = instruments_from(
            FakeSensor::new(&[100]),
            FakeSensor::new(&[200]).failing_reads(),
            IntegrationTime::Ms500,
        );
        let engine = MeasurementEngine::new(MeasurementKind::RawCount);
        assert_eq!(
            engine.evaluate(&mut inst),
            MeasurementValue::Pair([Reading::Value(100.0), Reading::Fault])
        );
    }

    #[test]
    fn test_scatter_ratio_read_failure_wins_over_overflow() {
        let engine = MeasurementEngine::new(MeasurementKind::DualSensor);

        let mut inst = instruments_from(
            FakeSensor::new(&[100]).failing_reads(),
            FakeSensor::new(&[200]),
            IntegrationTime::Ms500,
        );
        assert_eq!(single(engine.evaluate(&mut inst)), Reading::Fault);

        let mut inst = instruments_from(
            FakeSensor::new(&[MAX_COUNT_100MS]),
            FakeSensor::new(&[200]).failing_reads(),
            IntegrationTime::Ms100,
        );
        assert_eq!(single(engine.evaluate(&mut inst)), Reading::Fault);
    }

    #[test]
    fn test_irradiance_units_and_value() {
        let mut inst = instruments(&[500], &[0]);
        let engine = MeasurementEngine::new(MeasurementKind::Irradiance);
        let value = engine.evaluate(&mut inst);
        let expected = 500.0 / (1.0 * 500.0) * crate::sensor::IRRADIANCE_COEFF;
        let v90 = value.slots()[0].value().unwrap();
        assert!((v90 - expected).abs() < 1e-3);
        assert_eq!(value.slots()[1], Reading::Value(0.0));
    }

    #[test]
    fn test_relative_unit_needs_baseline() {
        let mut inst = instruments(&[100], &[200]);
        let engine = MeasurementEngine::new(MeasurementKind::RelativeUnit);
        assert_eq!(single(engine.evaluate(&mut inst)), Reading::NotCalibrated);

        let mut delay = CountingDelay::default();
        assert!(engine.normalize(&mut inst, &mut delay).unwrap().is_ok());

        // ref * irr90 / irr180 with identical settings reduces to counts
        let value = single(engine.evaluate(&mut inst)).value().unwrap();
        assert!((value - 250.0).abs() < 1e-2);
    }

    #[test]
    fn test_zero_baseline_rejected() {
        let mut inst = instruments(&[100], &[0]);
        let engine = MeasurementEngine::new(MeasurementKind::Sensor180Normalized);
        let mut delay = CountingDelay::default();
        assert_eq!(
            engine.normalize(&mut inst, &mut delay),
            Some(Err(CalibrationError::ZeroNormalizationSample))
        );
        assert_eq!(single(engine.evaluate(&mut inst)), Reading::NotCalibrated);
    }

    #[test]
    fn test_normalize_blocks_for_all_samples() {
        let mut inst = instruments(&[100], &[100]);
        let engine = MeasurementEngine::new(MeasurementKind::Sensor90Normalized);
        let mut delay = CountingDelay::default();
        engine.normalize(&mut inst, &mut delay).unwrap().unwrap();
        assert_eq!(
            delay.total_ns,
            NUM_NORM_SAMPLES as u64 * NORM_SAMPLE_DELAY_MS as u64 * 1_000_000
        );
        let value = single(engine.evaluate(&mut inst)).value().unwrap();
        assert!((value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_norm_noop_for_raw_kinds() {
        let mut inst = instruments(&[100], &[100]);
        let engine = MeasurementEngine::new(MeasurementKind::Sensor90);
        let mut delay = CountingDelay::default();
        assert_eq!(engine.normalize(&mut inst, &mut delay), None);
        assert_eq!(delay.total_ns, 0);
    }

    #[test]
    fn test_scatter_ratio() {
        let mut inst = instruments(&[50], &[200]);
        let engine = MeasurementEngine::new(MeasurementKind::DualSensor);
        let value = single(engine.evaluate(&mut inst)).value().unwrap();
        assert!((value - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_scatter_ratio_zero_denominator() {
        let mut inst = instruments(&[50], &[0]);
        let engine = MeasurementEngine::new(MeasurementKind::DualSensor);
        assert_eq!(single(engine.evaluate(&mut inst)), Reading::NotCalibrated);
    }

    #[test]
    fn test_scatter_ratio_overflow() {
        let mut inst = instruments_with(&[10], &[MAX_COUNT_100MS], IntegrationTime::Ms100);
        let engine = MeasurementEngine::new(MeasurementKind::DualSensor);
        assert_eq!(single(engine.evaluate(&mut inst)), Reading::Overflow);
    }

    #[test]
    fn test_integrated_skips_overflow() {
        let mut inst = instruments_with(
            &[100, MAX_COUNT_100MS, 200],
            &[0],
            IntegrationTime::Ms100,
        );
        let engine = MeasurementEngine::new(MeasurementKind::Sensor90Integrated);

        let first = single(engine.evaluate(&mut inst)).value().unwrap();
        assert!((first - 100.0 / INTEGRATOR_LEN as f32).abs() < 1e-4);

        assert_eq!(single(engine.evaluate(&mut inst)), Reading::Overflow);

        let third = single(engine.evaluate(&mut inst)).value().unwrap();
        assert!((third - 300.0 / INTEGRATOR_LEN as f32).abs() < 1e-4);
    }
}
