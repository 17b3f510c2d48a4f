//! Calibrator implementation
//!
//! A normalization sample draws `n` readings with a fixed delay before each
//! one and keeps their median. The control loop stalls for `n * delay`
//! while this runs: no input is read and the screen keeps its last frame.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::constants::MAX_NORM_SAMPLES;
use crate::sensor::SensorError;

/// Errors from a normalization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Median of the samples was zero or negative
    ZeroNormalizationSample,
    /// A reading failed part-way through (e.g. overflow)
    Sensor(SensorError),
    /// Asked for zero samples
    NoSamples,
}

impl From<SensorError> for CalibrationError {
    fn from(e: SensorError) -> Self {
        CalibrationError::Sensor(e)
    }
}

impl core::fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalibrationError::ZeroNormalizationSample => {
                f.write_str("normalization sample is 0")
            }
            CalibrationError::Sensor(e) => write!(f, "normalization failed: {}", e),
            CalibrationError::NoSamples => f.write_str("no normalization samples"),
        }
    }
}

/// Blanking state shown on normalized measurement screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlankStatus {
    NotBlanked,
    Blanked,
    /// Last attempt was rejected (an earlier baseline may still be in use)
    Failed(CalibrationError),
}

/// Normalization baseline for one sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibrator {
    /// Last accepted median (None until blanked)
    baseline: Option<f32>,
    /// Reference value the baseline maps to in relative units
    reference: f32,
}

impl Calibrator {
    /// Create an un-blanked calibrator
    pub const fn new(reference: f32) -> Self {
        Self {
            baseline: None,
            reference,
        }
    }

    /// Last accepted baseline
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    /// Whether a baseline has been accepted
    pub fn is_blanked(&self) -> bool {
        self.baseline.is_some()
    }

    /// Draw `n` readings and store their median as the new baseline
    ///
    /// `n` is capped at [`MAX_NORM_SAMPLES`]. On any error the previous
    /// baseline is kept.
    pub fn sample<F, D>(
        &mut self,
        mut read: F,
        n: usize,
        delay: &mut D,
        delay_ms: u32,
    ) -> Result<f32, CalibrationError>
    where
        F: FnMut() -> Result<f32, SensorError>,
        D: DelayNs,
    {
        let n = n.min(MAX_NORM_SAMPLES);
        if n == 0 {
            return Err(CalibrationError::NoSamples);
        }

        let mut samples: Vec<f32, MAX_NORM_SAMPLES> = Vec::new();
        for _ in 0..n {
            delay.delay_ms(delay_ms);
            let value = read()?;
            // Capacity is MAX_NORM_SAMPLES and n is capped to it.
            let _ = samples.push(value);
        }

        let median = median(&mut samples).ok_or(CalibrationError::NoSamples)?;
        if median > 0.0 {
            info!("Normalization baseline {}", median);
            self.baseline = Some(median);
            Ok(median)
        } else {
            warn!("Normalization sample {} rejected", median);
            Err(CalibrationError::ZeroNormalizationSample)
        }
    }

    /// `value / baseline`, or None if not blanked
    pub fn normalize(&self, value: f32) -> Option<f32> {
        self.baseline.map(|b| value / b)
    }

    /// `reference * value / baseline`, or None if not blanked
    pub fn relative(&self, value: f32) -> Option<f32> {
        self.normalize(value).map(|r| self.reference * r)
    }

    /// Status before any attempt in the current session
    pub fn status(&self) -> BlankStatus {
        if self.is_blanked() {
            BlankStatus::Blanked
        } else {
            BlankStatus::NotBlanked
        }
    }
}

/// Median of a sample set (sorts in place)
///
/// Even-length sets return the mean of the two middle values.
pub fn median(samples: &mut [f32]) -> Option<f32> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_unstable_by(|a, b| a.total_cmp(b));
    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        Some(samples[mid])
    } else {
        Some((samples[mid - 1] + samples[mid]) / 2.0)
    }
}
