//! JSON configuration parsing and validation

use core::fmt;
use core::fmt::Write as _;

use alloc::string::String;
use heapless::{String as HString, Vec};
use serde_json::{Map, Value};

use super::types::{Configuration, MAX_ISSUES, MAX_NAME_LEN};
use crate::measurement::MeasurementKind;
use crate::sensor::{Gain, IntegrationTime, SensorId};

const REF_IRRADIANCE_KEY: &str = "ref_irradiance_180";
const STARTUP_KEY: &str = "startup";

/// Offending value echoed back to the user (truncated)
pub type Name = HString<MAX_NAME_LEN>;

/// Structural load failure; the device runs on defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Text is not valid JSON
    InvalidJson,
    /// Top level is not a JSON object
    NotAnObject,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidJson => f.write_str("configuration is not valid json"),
            ConfigError::NotAnObject => f.write_str("configuration is not a json object"),
        }
    }
}

/// One configuration entry that was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    /// `gain_<sensor>` is not a known gain name
    UnknownGain { key: &'static str, value: Name },
    /// `itime_<sensor>` is not a known integration time
    UnknownIntegrationTime { key: &'static str, value: Name },
    /// `ref_irradiance_180` is not a finite number
    InvalidReference,
    /// `startup` does not name a measurement
    UnknownStartup(Name),
}

impl ConfigIssue {
    /// Configuration key the issue refers to
    pub fn key(&self) -> &'static str {
        match self {
            ConfigIssue::UnknownGain { key, .. } => *key,
            ConfigIssue::UnknownIntegrationTime { key, .. } => *key,
            ConfigIssue::InvalidReference => REF_IRRADIANCE_KEY,
            ConfigIssue::UnknownStartup(_) => STARTUP_KEY,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::UnknownGain { value, .. } => {
                write!(f, "configuration unknown gain {}", value)
            }
            ConfigIssue::UnknownIntegrationTime { value, .. } => {
                write!(f, "configuration unknown integration time {}", value)
            }
            ConfigIssue::InvalidReference => {
                write!(f, "unable to convert {} to float", REF_IRRADIANCE_KEY)
            }
            ConfigIssue::UnknownStartup(name) => {
                write!(f, "startup measurement {} not found", name)
            }
        }
    }
}

/// Parsed configuration plus the entries that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub config: Configuration,
    pub issues: Vec<ConfigIssue, MAX_ISSUES>,
}

impl Loaded {
    /// The issue to put on screen
    ///
    /// An unknown startup name changes what the device measures, so it wins
    /// over dropped sensor settings; otherwise the first issue in key order.
    pub fn notice(&self) -> Option<&ConfigIssue> {
        self.issues
            .iter()
            .find(|issue| matches!(issue, ConfigIssue::UnknownStartup(_)))
            .or_else(|| self.issues.first())
    }
}

/// Parse and validate a JSON configuration document
pub fn parse(text: &str) -> Result<Loaded, ConfigError> {
    let value: Value = serde_json::from_str(text).map_err(|_| {
        warn!("Configuration: invalid JSON");
        ConfigError::InvalidJson
    })?;
    let map = value.as_object().ok_or_else(|| {
        warn!("Configuration: top level is not an object");
        ConfigError::NotAnObject
    })?;
    Ok(validate(map))
}

/// Validate each known key, dropping bad entries
pub fn validate(map: &Map<String, Value>) -> Loaded {
    let mut config = Configuration::default();
    let mut issues: Vec<ConfigIssue, MAX_ISSUES> = Vec::new();
    let mut report = |issue: ConfigIssue| {
        warn!("Configuration: dropped {}", issue.key());
        // Only the first issue is shown; extras past capacity can go.
        let _ = issues.push(issue);
    };

    for (key, value) in map {
        match lookup_key(key) {
            Some(Key::Gain(id)) => match value.as_str().and_then(Gain::from_name) {
                Some(gain) => config.sensor_mut(id).gain = Some(gain),
                None => report(ConfigIssue::UnknownGain {
                    key: gain_key(id),
                    value: echo(value),
                }),
            },
            Some(Key::Itime(id)) => {
                match value.as_str().and_then(IntegrationTime::from_name) {
                    Some(itime) => config.sensor_mut(id).integration_time = Some(itime),
                    None => report(ConfigIssue::UnknownIntegrationTime {
                        key: itime_key(id),
                        value: echo(value),
                    }),
                }
            }
            Some(Key::Reference) => match reference(value) {
                Some(r) => config.ref_irradiance_180 = r,
                None => report(ConfigIssue::InvalidReference),
            },
            Some(Key::Startup) => {
                match value.as_str().and_then(MeasurementKind::from_name) {
                    Some(kind) => config.startup = Some(kind),
                    None => report(ConfigIssue::UnknownStartup(echo(value))),
                }
            }
            None => {
                debug!("Configuration: ignoring unknown key");
            }
        }
    }

    Loaded { config, issues }
}

enum Key {
    Gain(SensorId),
    Itime(SensorId),
    Reference,
    Startup,
}

fn lookup_key(key: &str) -> Option<Key> {
    match key {
        REF_IRRADIANCE_KEY => return Some(Key::Reference),
        STARTUP_KEY => return Some(Key::Startup),
        _ => {}
    }
    SensorId::ALL.into_iter().find_map(|id| {
        if key == gain_key(id) {
            Some(Key::Gain(id))
        } else if key == itime_key(id) {
            Some(Key::Itime(id))
        } else {
            None
        }
    })
}

const fn gain_key(id: SensorId) -> &'static str {
    match id {
        SensorId::S90 => "gain_sensor_90",
        SensorId::S180 => "gain_sensor_180",
    }
}

const fn itime_key(id: SensorId) -> &'static str {
    match id {
        SensorId::S90 => "itime_sensor_90",
        SensorId::S180 => "itime_sensor_180",
    }
}

/// Numbers, or strings holding a number
fn reference(value: &Value) -> Option<f32> {
    let r = match value {
        Value::Number(n) => n.as_f64()? as f32,
        Value::String(s) => s.trim().parse::<f32>().ok()?,
        _ => return None,
    };
    r.is_finite().then_some(r)
}

/// Value text for an issue message
fn echo(value: &Value) -> Name {
    let mut name = Name::new();
    let text = match value {
        Value::String(s) => s.as_str(),
        Value::Null => "null",
        Value::Bool(true) => "true",
        Value::Bool(false) => "false",
        Value::Number(n) => {
            let _ = write!(name, "{}", n);
            return name;
        }
        Value::Array(_) => "[..]",
        Value::Object(_) => "{..}",
    };
    for c in text.chars() {
        if name.push(c).is_err() {
            break;
        }
    }
    name
}
