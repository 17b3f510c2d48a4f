//! View to screen rendering
//!
//! Row layout for the 8 x 21 character panel:
//!
//! - Measure: label, value, settings per slot; blank status on row 6;
//!   battery on row 7
//! - Menu: title, then one page of numbered items with the cursor row
//!   highlighted
//! - Message: title, wrapped text, then a footer telling the user how to
//!   leave

use core::fmt::Write;

use heapless::String;

use colorimeter_core::calibration::BlankStatus;
use colorimeter_core::constants::{NOT_CALIBRATED_MARKER, OVERFLOW_MARKER};
use colorimeter_core::measurement::{MeasurementKind, Reading};
use colorimeter_core::menu::{MenuItem, MenuNavigator};
use colorimeter_core::state::{Message, MessageKind};
use colorimeter_core::view::{MeasureView, SensorSettingsView, View};

use crate::screen::{Row, Screen, SCREEN_COLS, SCREEN_ROWS};

/// Capacity of a formatted reading
pub const VALUE_LEN: usize = 16;

const FAULT_MARKER: &str = "FAULT";
const BLANK_ROW: usize = SCREEN_ROWS - 2;
const BATTERY_ROW: usize = SCREEN_ROWS - 1;
const MESSAGE_TEXT_ROW: usize = 2;
const MESSAGE_TEXT_ROWS: usize = 4;

/// Format one reading for display
///
/// Counts are whole numbers. Other values get 3 decimals up to 10 and 2
/// above.
pub fn format_reading(reading: Reading, kind: MeasurementKind) -> String<VALUE_LEN> {
    let mut out = String::new();
    // Values that do not fit are cut; the markers always fit.
    let _ = match reading {
        Reading::Value(v) if is_count(kind) => write!(out, "{:.0}", v),
        Reading::Value(v) if v <= 10.0 => write!(out, "{:.3}", v),
        Reading::Value(v) => write!(out, "{:.2}", v),
        Reading::Overflow => out.push_str(OVERFLOW_MARKER).map_err(|_| core::fmt::Error),
        Reading::NotCalibrated => out
            .push_str(NOT_CALIBRATED_MARKER)
            .map_err(|_| core::fmt::Error),
        Reading::Fault => out.push_str(FAULT_MARKER).map_err(|_| core::fmt::Error),
    };
    out
}

fn is_count(kind: MeasurementKind) -> bool {
    matches!(
        kind,
        MeasurementKind::RawCount | MeasurementKind::Sensor90 | MeasurementKind::Sensor180
    )
}

/// Keeps the last frame and only marks the screen dirty when it changes
#[derive(Default)]
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a view; the returned screen is dirty only if content changed
    pub fn draw(&mut self, view: &View<'_>) -> &mut Screen {
        let mut next = Screen::new();
        match view {
            View::Measure(v) => measure(&mut next, v),
            View::Menu(nav) => menu(&mut next, nav),
            View::Message(msg) => message(&mut next, msg),
        }
        if !next.same_content(&self.screen) {
            self.screen = next;
        }
        &mut self.screen
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }
}

fn measure(screen: &mut Screen, view: &MeasureView) {
    let kind = view.kind;
    let labels = kind.labels();
    let selectable = kind.selectable_sensors();
    let rows_per_slot = if kind.is_pair() { 3 } else { 2 + selectable.len() };

    for (slot, label) in labels.iter().enumerate() {
        let base = slot * rows_per_slot;
        screen.set_row(base, label);

        if let Some(reading) = view.value.as_ref().and_then(|v| v.slots().get(slot)) {
            screen.set_row(base + 1, &value_line(*reading, kind));
        }

        // Pairs show the settings of their own sensor; single kinds list
        // every adjustable sensor.
        let shown = if kind.is_pair() {
            selectable.get(slot..=slot).unwrap_or(&[])
        } else {
            selectable
        };
        for (i, id) in shown.iter().enumerate() {
            let Some(settings) = view.settings.iter().find(|s| s.sensor == *id) else {
                continue;
            };
            let row = base + 2 + i;
            screen.set_row(row, &settings_line(settings));
            if view.selected == Some(*id) {
                screen.invert_row(row);
            }
        }
    }

    match view.blank {
        Some(BlankStatus::NotBlanked) => screen.set_row(BLANK_ROW, "not blanked"),
        Some(BlankStatus::Failed(_)) => screen.set_row(BLANK_ROW, "blanking failed"),
        Some(BlankStatus::Blanked) | None => {}
    }

    let mut battery = Row::new();
    let _ = write!(battery, "battery {:.1}V", view.battery_volts);
    screen.set_row(BATTERY_ROW, &battery);
}

fn value_line(reading: Reading, kind: MeasurementKind) -> Row {
    let mut line = Row::new();
    let _ = line.push_str(&format_reading(reading, kind));
    if let (Reading::Value(_), Some(units)) = (reading, kind.units()) {
        let _ = write!(line, " {}", units);
    }
    line
}

fn settings_line(settings: &SensorSettingsView) -> Row {
    let mut line = Row::new();
    let _ = write!(
        line,
        "gain={} time={}",
        settings.gain.name(),
        settings.integration_time.name()
    );
    line
}

fn menu(screen: &mut Screen, nav: &MenuNavigator<'static, MenuItem>) {
    screen.set_row(0, "Menu");
    for (row, (index, item)) in nav.visible_page().enumerate() {
        let mut line = Row::new();
        let _ = write!(line, "{} {}", index, item.label());
        screen.set_row(row + 1, &line);
    }
    if !nav.is_empty() {
        screen.invert_row(nav.cursor_row() + 1);
    }
}

fn message(screen: &mut Screen, msg: &Message) {
    let title = match msg.kind() {
        MessageKind::About => "About",
        MessageKind::Error => "Error",
        MessageKind::Abort => "Fatal Error",
    };
    screen.set_row(0, title);

    for (i, line) in wrap(msg.text(), SCREEN_COLS)
        .take(MESSAGE_TEXT_ROWS)
        .enumerate()
    {
        screen.set_row(MESSAGE_TEXT_ROW + i, &line);
    }

    let footer = if msg.ok_to_continue() {
        "menu to continue"
    } else {
        "restart required"
    };
    screen.set_row(BATTERY_ROW, footer);
}

/// Greedy word wrap; words longer than a line are split
fn wrap(text: &str, width: usize) -> impl Iterator<Item = Row> + '_ {
    let mut words = text.split_whitespace().peekable();
    let mut carry: Option<&str> = None;
    core::iter::from_fn(move || {
        let mut line = Row::new();
        let mut used = 0;
        loop {
            let word = match carry.take() {
                Some(w) => w,
                None => words.next()?,
            };
            let len = word.chars().count();
            let gap = usize::from(used > 0);
            if used + gap + len <= width {
                if gap == 1 {
                    let _ = line.push(' ');
                }
                let _ = line.push_str(word);
                used += gap + len;
            } else if used == 0 {
                let split = word
                    .char_indices()
                    .nth(width)
                    .map_or(word.len(), |(at, _)| at);
                let _ = line.push_str(&word[..split]);
                carry = Some(&word[split..]);
                return Some(line);
            } else {
                carry = Some(word);
                return Some(line);
            }
            if words.peek().is_none() && carry.is_none() {
                return Some(line);
            }
        }
    })
    .filter(|line| !line.is_empty())
}
