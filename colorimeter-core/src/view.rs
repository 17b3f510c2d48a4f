//! Render-facing snapshot of the controller
//!
//! Everything a screen needs for one frame, without access to the sensors.

use heapless::Vec;

use crate::calibration::BlankStatus;
use crate::measurement::{MeasurementKind, MeasurementValue};
use crate::menu::{MenuItem, MenuNavigator};
use crate::sensor::{Gain, IntegrationTime, SensorId};
use crate::state::Message;

/// Current settings of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSettingsView {
    pub sensor: SensorId,
    pub gain: Gain,
    pub integration_time: IntegrationTime,
}

/// Measure-mode frame
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureView {
    pub kind: MeasurementKind,
    /// None until the first evaluation after entering the mode
    pub value: Option<MeasurementValue>,
    /// One entry per sensor feeding the kind
    pub settings: Vec<SensorSettingsView, 2>,
    pub selected: Option<SensorId>,
    /// Present for normalized kinds only
    pub blank: Option<BlankStatus>,
    /// Low-pass filtered battery voltage
    pub battery_volts: f32,
}

/// One frame, per mode
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Measure(MeasureView),
    Menu(&'a MenuNavigator<'static, MenuItem>),
    /// Message and Abort modes; see [`Message::ok_to_continue`]
    Message(&'a Message),
}
