//! Display values shown by the environmental dashboard.
//!
//! Nothing in here knows about the UI toolkit. The types are plain value
//! holders that the app converts into Slint structs.

pub mod chart;
pub mod clock;
pub mod layout;

use serde::{Deserialize, Serialize};

pub use chart::{AxisTick, ChartGeometry, PlotPoint, Tooltip, YAxis};
pub use clock::ClockFace;
pub use layout::{Card, CardKind, CardSlot, ColumnGrid, DashboardLayout};

/// Unit a reading is displayed in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Celsius,
    Percent,
}

impl Unit {
    /// Suffix shown next to the value.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Percent => "%",
        }
    }

    /// Suffix shown next to a bound. Temperature bounds only carry the degree sign.
    pub fn bound_symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°",
            Unit::Percent => "%",
        }
    }
}

/// Upper and lower bound of a reading.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub max: f32,
    pub min: f32,
}

/// One scalar reading with its bounds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Reading {
    pub value: f32,
    pub bounds: Bounds,
    pub unit: Unit,
}

impl Reading {
    pub fn value_text(&self) -> String {
        format_number(self.value)
    }

    pub fn max_text(&self) -> String {
        format!("~ {}{}", format_number(self.bounds.max), self.unit.bound_symbol())
    }

    pub fn min_text(&self) -> String {
        format!("~ {}{}", format_number(self.bounds.min), self.unit.bound_symbol())
    }
}

/// Whole numbers are printed without a fractional part, everything else with one digit.
fn format_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// A labelled value of the historical series.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f32,
}

/// The historical humidity series plotted by the chart card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct HistoricalSeries {
    /// Dataset name, e.g. `Humidity %`.
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

impl HistoricalSeries {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Connectivity metadata of the monitored device.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DeviceStatus {
    pub name: String,
    pub address: String,
    pub signal: String,
    pub uptime: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct AlertMessage {
    pub title: String,
    pub body: String,
}

/// Everything the dashboard shows except the clock.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DashboardData {
    pub temperature: Reading,
    pub humidity: Reading,
    pub device: DeviceStatus,
    pub alert: AlertMessage,
    pub chart_title: String,
    pub history: HistoricalSeries,
}

#[cfg(test)]
pub(crate) fn sample_data() -> DashboardData {
    let labels = ["05 Mar", "06 Mar", "07 Mar", "08 Mar", "09 Mar", "10 Mar", "11 Mar", "12 Mar", "13 Mar"];
    let values = [55.0, 58.0, 40.0, 38.0, 40.0, 42.0, 45.0, 38.0, 25.0];

    DashboardData {
        temperature: Reading {
            value: 24.0,
            bounds: Bounds { max: 30.0, min: 17.0 },
            unit: Unit::Celsius,
        },
        humidity: Reading {
            value: 50.0,
            bounds: Bounds { max: 60.0, min: 30.0 },
            unit: Unit::Percent,
        },
        device: DeviceStatus {
            name: "ESP32".into(),
            address: "192.168.1.150".into(),
            signal: "-65 dBm".into(),
            uptime: "2 days, 14 hours".into(),
        },
        alert: AlertMessage {
            title: "Low Humidity Detected".into(),
            body: "Consider using a humidifier.".into(),
        },
        chart_title: "Dynamic Updating Chart".into(),
        history: HistoricalSeries {
            label: "Humidity %".into(),
            points: labels
                .iter()
                .zip(values)
                .map(|(label, value)| SeriesPoint {
                    label: label.to_string(),
                    value,
                })
                .collect(),
        },
    }
}

#[test]
fn test_reading_texts() {
    let data = sample_data();

    assert_eq!(data.temperature.value_text(), "24");
    assert_eq!(data.temperature.unit.symbol(), "°C");
    assert_eq!(data.temperature.max_text(), "~ 30°");
    assert_eq!(data.temperature.min_text(), "~ 17°");

    assert_eq!(data.humidity.value_text(), "50");
    assert_eq!(data.humidity.unit.symbol(), "%");
    assert_eq!(data.humidity.max_text(), "~ 60%");
    assert_eq!(data.humidity.min_text(), "~ 30%");
}

#[test]
fn test_fractional_reading() {
    let reading = Reading {
        value: 21.3,
        bounds: Bounds { max: 25.0, min: 18.5 },
        unit: Unit::Celsius,
    };

    assert_eq!(reading.value_text(), "21.3");
    assert_eq!(reading.min_text(), "~ 18.5°");
}

#[test]
fn test_unit_deserializes_snake_case() {
    let unit: Unit = serde_json::from_str("\"percent\"").unwrap();
    assert_eq!(unit, Unit::Percent);
}
