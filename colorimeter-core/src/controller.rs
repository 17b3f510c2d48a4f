//! Top-level colorimeter controller
//!
//! Owns every piece of device state. Each loop tick goes through
//! [`Colorimeter::tick`]: debounce, dispatch to the current mode, evaluate
//! the measurement, update the battery filter.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::calibration::BlankStatus;
use crate::config::{self, ConfigIssue, Configuration};
use crate::constants::MENU_ITEMS_PER_SCREEN;
use crate::filter::BatteryMonitor;
use crate::input::{Button, ButtonDebouncer, ButtonEvent};
use crate::measurement::{Instruments, MeasurementKind, MeasurementValue};
use crate::menu::{MenuItem, MenuNavigator};
use crate::sensor::{SensorController, SensorId};
use crate::state::{Event, MeasureState, Message, Mode};
use crate::traits::{AdcReader, LightSensor};
use crate::view::{MeasureView, SensorSettingsView, View};

/// State owned by the active mode, rebuilt on every entry
#[derive(Debug, Clone, PartialEq)]
pub enum ModeState {
    Measure(MeasureState),
    Menu(MenuNavigator<'static, MenuItem>),
    Message(Message),
    Abort(Message),
}

impl ModeState {
    pub fn mode(&self) -> Mode {
        match self {
            ModeState::Measure(_) => Mode::Measure,
            ModeState::Menu(_) => Mode::Menu,
            ModeState::Message(_) => Mode::Message,
            ModeState::Abort(_) => Mode::Abort,
        }
    }
}

/// The device
pub struct Colorimeter<S> {
    /// None only in Abort mode (a sensor failed to initialize)
    instruments: Option<Instruments<S>>,
    config: Configuration,
    mode: ModeState,
    /// Measurement chosen in the menu (or the startup one)
    measurement: MeasurementKind,
    debouncer: ButtonDebouncer,
    battery: BatteryMonitor,
    value: Option<MeasurementValue>,
}

impl<S: LightSensor> Colorimeter<S> {
    /// Load configuration, initialize both sensors and pick the first mode
    ///
    /// `config_text` is the JSON document, or None when there is none. A
    /// sensor failure leads to Abort; otherwise the first configuration
    /// problem is shown in Message mode; otherwise the device starts
    /// measuring.
    pub fn boot(config_text: Option<&str>, sensor_90: S, sensor_180: S) -> Self {
        let mut notice: Option<Message> = None;

        let config = match config_text.map(config::parse) {
            None => Configuration::default(),
            Some(Ok(loaded)) => {
                notice = loaded.notice().map(issue_message);
                loaded.config
            }
            Some(Err(e)) => {
                notice = Some(Message::error(format_args!("{}", e)));
                Configuration::default()
            }
        };

        let mut fault: Option<Message> = None;
        let mut init = |device: S, id: SensorId| {
            match SensorController::new(
                device,
                id,
                config.gain(id),
                config.integration_time(id),
            ) {
                Ok(sensor) => Some(sensor),
                Err(e) => {
                    if fault.is_none() {
                        fault = Some(Message::abort(format_args!(
                            "missing sensor? {} @{}",
                            e,
                            id.angle()
                        )));
                    }
                    None
                }
            }
        };
        let s90 = init(sensor_90, SensorId::S90);
        let s180 = init(sensor_180, SensorId::S180);

        let instruments = match (s90, s180) {
            (Some(a), Some(b)) => Some(Instruments::new(a, b, config.ref_irradiance_180)),
            _ => None,
        };

        let measurement = config.startup_kind();
        let mut device = Self {
            instruments,
            config,
            mode: ModeState::Measure(MeasureState::new(measurement, None)),
            measurement,
            debouncer: ButtonDebouncer::default(),
            battery: BatteryMonitor::new(),
            value: None,
        };
        device.mode = ModeState::Measure(device.measure_state());

        if let Some(msg) = fault {
            error!("Boot: sensor failure");
            device.dispatch(Event::Fatal, Some(msg));
        } else if let Some(msg) = notice {
            warn!("Boot: configuration problem");
            device.dispatch(Event::Recoverable, Some(msg));
        } else {
            info!("Boot: measuring {}", measurement.name());
        }
        device
    }

    /// One loop iteration
    ///
    /// `event` is at most one raw keypad edge, `now_ms` a monotonic
    /// timestamp. Normalization (norm button) blocks on `delay`.
    pub fn tick<A: AdcReader, D: DelayNs>(
        &mut self,
        event: Option<ButtonEvent>,
        now_ms: u64,
        adc: &mut A,
        delay: &mut D,
    ) {
        if let Some(event) = event.and_then(|e| self.debouncer.filter(e, now_ms)) {
            self.handle_event(event, delay);
        }
        self.refresh();
        self.battery.update(adc);
    }

    /// Act on one debounced button event
    ///
    /// Releases are ignored. Buttons with no meaning in the current mode are
    /// no-ops.
    pub fn handle_event<D: DelayNs>(&mut self, event: ButtonEvent, delay: &mut D) {
        if !event.pressed {
            return;
        }

        match &mut self.mode {
            ModeState::Abort(_) => {}
            ModeState::Message(_) => {
                if event.button == Button::Menu {
                    self.dispatch(Event::MenuButton, None);
                }
            }
            ModeState::Menu(nav) => match event.button {
                Button::Menu => {
                    // Leaving the menu measures what the cursor is on; on
                    // "About" the last measurement stays.
                    if let Some(MenuItem::Measurement(kind)) = nav.selected().copied() {
                        self.measurement = kind;
                    }
                    self.dispatch(Event::MenuButton, None);
                }
                Button::Up => nav.decrement(),
                Button::Down => nav.increment(),
                Button::Right => match nav.selected().copied() {
                    Some(MenuItem::About) => {
                        self.dispatch(Event::AboutSelected, Some(Message::about()))
                    }
                    Some(MenuItem::Measurement(kind)) => {
                        info!("Selected {}", kind.name());
                        self.measurement = kind;
                        self.dispatch(Event::MeasurementSelected, None);
                    }
                    None => {}
                },
                _ => {}
            },
            ModeState::Measure(state) => match event.button {
                Button::Menu => self.dispatch(Event::MenuButton, None),
                Button::Right => {
                    state.select_next();
                }
                Button::Gain | Button::Itime => {
                    let (Some(id), Some(inst)) =
                        (state.selected_sensor(), self.instruments.as_mut())
                    else {
                        return;
                    };
                    let sensor = inst.sensor_mut(id);
                    let result = if event.button == Button::Gain {
                        sensor.next_gain().map(|_| ())
                    } else {
                        sensor.next_integration_time().map(|_| ())
                    };
                    if result.is_err() {
                        warn!("Sensor {}: settings change failed", id);
                    }
                }
                Button::Norm => {
                    let Some(inst) = self.instruments.as_mut() else {
                        return;
                    };
                    if let Some(result) = state.engine().normalize(inst, delay) {
                        state.record_blank(result);
                    }
                }
                _ => {}
            },
        }
    }

    /// Re-evaluate the active measurement
    pub fn refresh(&mut self) {
        if let (ModeState::Measure(state), Some(inst)) = (&self.mode, self.instruments.as_mut()) {
            self.value = Some(state.engine().evaluate(inst));
        }
    }

    /// Current operating mode
    pub fn current_mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn mode_state(&self) -> &ModeState {
        &self.mode
    }

    /// Measurement shown in Measure mode
    pub fn measurement(&self) -> MeasurementKind {
        self.measurement
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn instruments(&self) -> Option<&Instruments<S>> {
        self.instruments.as_ref()
    }

    pub fn battery_voltage(&self) -> f32 {
        self.battery.voltage_lowpass()
    }

    /// Snapshot for the screen
    pub fn view(&self) -> View<'_> {
        match &self.mode {
            ModeState::Measure(state) => View::Measure(self.measure_view(state)),
            ModeState::Menu(nav) => View::Menu(nav),
            ModeState::Message(msg) | ModeState::Abort(msg) => View::Message(msg),
        }
    }

    fn measure_view(&self, state: &MeasureState) -> MeasureView {
        let mut settings = Vec::new();
        if let Some(inst) = &self.instruments {
            for id in state.kind().sensors() {
                let sensor = inst.sensor(*id);
                // At most two sensors; capacity is two.
                let _ = settings.push(SensorSettingsView {
                    sensor: *id,
                    gain: sensor.gain(),
                    integration_time: sensor.integration_time(),
                });
            }
        }
        MeasureView {
            kind: state.kind(),
            value: self.value,
            settings,
            selected: state.selected_sensor(),
            blank: state.blank_status(),
            battery_volts: self.battery.voltage_lowpass(),
        }
    }

    /// Apply a mode event, rebuilding the new mode's state on a change
    fn dispatch(&mut self, event: Event, message: Option<Message>) {
        let current = self.current_mode();
        let next = current.transition(event);
        if next == current {
            return;
        }
        info!("Mode {} -> {}", current, next);

        self.value = None;
        self.mode = match next {
            Mode::Measure => ModeState::Measure(self.measure_state()),
            Mode::Menu => ModeState::Menu(MenuNavigator::new(
                &MenuItem::ALL,
                MENU_ITEMS_PER_SCREEN,
            )),
            Mode::Message => ModeState::Message(message.unwrap_or_else(Message::about)),
            Mode::Abort => ModeState::Abort(
                message.unwrap_or_else(|| Message::abort(format_args!("device halted"))),
            ),
        };
    }

    fn measure_state(&self) -> MeasureState {
        let blank = self.measurement.norm_sensor().map(|id| {
            self.instruments
                .as_ref()
                .map_or(BlankStatus::NotBlanked, |inst| inst.calibrator(id).status())
        });
        MeasureState::new(self.measurement, blank)
    }
}

fn issue_message(issue: &ConfigIssue) -> Message {
    Message::error(format_args!("{}", issue))
}
