//! Application-wide constants
//!
//! Timing parameters, sample counts and device limits live here so they can
//! be tuned in one place.

/// Firmware version reported by the About message.
pub const FIRMWARE_VERSION: &str = "0.1.0f";

/// Main loop period (ms). One button event and one display refresh per tick.
pub const LOOP_PERIOD_MS: u32 = 100;

/// Minimum spacing between two accepted button presses (ms).
pub const DEBOUNCE_WINDOW_MS: u64 = 600;

/// Number of readings drawn for one normalization sample.
pub const NUM_NORM_SAMPLES: usize = 10;

/// Upper bound on readings per normalization sample (median buffer size).
pub const MAX_NORM_SAMPLES: usize = 64;

/// Delay between normalization readings (ms).
pub const NORM_SAMPLE_DELAY_MS: u32 = 50;

/// Window length of the moving-average integrator.
pub const INTEGRATOR_LEN: usize = 10;

/// Reference irradiance used by the relative-unit measurement when the
/// configuration does not provide one (µW/cm²).
pub const DEFAULT_REF_IRRADIANCE_180: f32 = 500.0;

/// Smoothing factor of the battery voltage low-pass filter.
pub const BATTERY_LOWPASS_ALPHA: f32 = 0.1;

/// Number of menu rows visible at once.
pub const MENU_ITEMS_PER_SCREEN: usize = 6;

/// Label of the trailing non-measurement menu entry.
pub const ABOUT_LABEL: &str = "About";

/// Display marker substituted for an overflowed reading.
pub const OVERFLOW_MARKER: &str = "OVFL";

/// Display marker for a normalized value without a baseline.
pub const NOT_CALIBRATED_MARKER: &str = "___.__";

/// Irradiance units string.
pub const IRRADIANCE_UNITS: &str = "\u{03BC}W/cm\u{00B2}";

/// Maximum length of a message shown in Message / Abort mode.
pub const MAX_MESSAGE_LEN: usize = 64;
