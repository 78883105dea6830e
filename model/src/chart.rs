//! Geometry of the humidity line chart.
//!
//! Slint has no charting widget, so the chart card draws a `Path` whose
//! commands are computed here. All coordinates are in the plot area's own
//! pixel space: `(0, 0)` is the top left corner, `(width, height)` the
//! bottom right one.

use std::fmt::Write;

use crate::HistoricalSeries;

/// Curve smoothing, 0.0 would draw straight segments.
pub const TENSION: f32 = 0.4;

/// How far from a point, in pixels, the pointer still hovers it.
pub const HOVER_RADIUS: f32 = 12.0;

/// Upper limit for the number of y axis gridlines.
pub const MAX_Y_TICKS: usize = 7;

/// Value range of the y axis. Always begins at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YAxis {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl YAxis {
    /// Scale from zero to the first "nice" step at or above `data_max`.
    pub fn begin_at_zero(data_max: f32, max_ticks: usize) -> Self {
        if !(data_max > 0.0) {
            return Self {
                min: 0.0,
                max: 1.0,
                step: 1.0,
            };
        }

        let spaces = max_ticks.saturating_sub(1).max(1) as f32;
        let step = nice_step(data_max / spaces);
        let max = (data_max / step).ceil() * step;

        Self { min: 0.0, max, step }
    }

    /// Tick values from `min` to `max`, inclusive.
    pub fn ticks(&self) -> Vec<f32> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count).map(|i| self.min + i as f32 * self.step).collect()
    }

    fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Rounds a raw step to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f32) -> f32 {
    let exponent = raw.log10().floor();
    let magnitude = 10f32.powf(exponent);
    let fraction = raw / magnitude;

    let nice = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// A series point placed in the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint {
    pub label: String,
    pub value: f32,
    pub x: f32,
    pub y: f32,
}

/// Text of the hover tooltip, the date label over `dataset: value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub body: String,
}

/// Gridline label and its position along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub label: String,
    pub position: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ControlPoints {
    previous: (f32, f32),
    next: (f32, f32),
}

/// Maps a [`HistoricalSeries`] onto a plot area of the given size.
#[derive(Clone, Debug)]
pub struct ChartGeometry {
    dataset: String,
    points: Vec<PlotPoint>,
    axis: YAxis,
    width: f32,
    height: f32,
}

impl ChartGeometry {
    pub fn new(series: &HistoricalSeries, width: f32, height: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);

        let data_max = series.values().fold(0.0f32, f32::max);
        let axis = YAxis::begin_at_zero(data_max, MAX_Y_TICKS);

        let count = series.len();
        let points = series
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| PlotPoint {
                label: point.label.clone(),
                value: point.value,
                x: category_x(index, count, width),
                y: value_y(point.value, &axis, height),
            })
            .collect();

        Self {
            dataset: series.label.clone(),
            points,
            axis,
            width,
            height,
        }
    }

    pub fn y_axis(&self) -> YAxis {
        self.axis
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// Index of the point closest to `(x, y)`, if it is within `radius` pixels.
    pub fn nearest_point(&self, x: f32, y: f32, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .map(|p| (p.x - x).hypot(p.y - y))
            .enumerate()
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.points.get(index).map(|point| Tooltip {
            title: point.label.clone(),
            body: format!("{}: {}", self.dataset, point.value),
        })
    }

    pub fn x_ticks(&self) -> Vec<AxisTick> {
        self.points
            .iter()
            .map(|p| AxisTick {
                label: p.label.clone(),
                position: p.x,
            })
            .collect()
    }

    pub fn y_ticks(&self) -> Vec<AxisTick> {
        self.axis
            .ticks()
            .into_iter()
            .map(|value| AxisTick {
                label: format!("{value}"),
                position: value_y(value, &self.axis, self.height),
            })
            .collect()
    }

    /// SVG path commands for the smoothed line, empty for an empty series.
    pub fn line_path(&self) -> String {
        let Some(first) = self.points.first() else {
            return String::new();
        };

        let mut path = String::new();
        let _ = write!(path, "M {:.2} {:.2}", first.x, first.y);

        let controls = self.control_points();
        for (index, point) in self.points.iter().enumerate().skip(1) {
            let (c1x, c1y) = controls[index - 1].next;
            let (c2x, c2y) = controls[index].previous;
            let _ = write!(
                path,
                " C {c1x:.2} {c1y:.2} {c2x:.2} {c2y:.2} {:.2} {:.2}",
                point.x, point.y
            );
        }

        path
    }

    /// Bezier control points around every point, scaled by the distance to
    /// the neighbours and kept inside the plot area.
    fn control_points(&self) -> Vec<ControlPoints> {
        let last = self.points.len().saturating_sub(1);

        self.points
            .iter()
            .enumerate()
            .map(|(index, current)| {
                let previous = &self.points[index.saturating_sub(1)];
                let next = &self.points[(index + 1).min(last)];

                let d01 = distance(previous, current);
                let d12 = distance(current, next);
                let total = d01 + d12;
                let (s01, s12) = if total > 0.0 {
                    (d01 / total, d12 / total)
                } else {
                    (0.0, 0.0)
                };

                let fa = TENSION * s01;
                let fb = TENSION * s12;
                let dx = next.x - previous.x;
                let dy = next.y - previous.y;

                ControlPoints {
                    previous: self.cap(current.x - fa * dx, current.y - fa * dy),
                    next: self.cap(current.x + fb * dx, current.y + fb * dy),
                }
            })
            .collect()
    }

    fn cap(&self, x: f32, y: f32) -> (f32, f32) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }
}

fn category_x(index: usize, count: usize, width: f32) -> f32 {
    if count < 2 {
        width / 2.0
    } else {
        index as f32 * width / (count - 1) as f32
    }
}

fn value_y(value: f32, axis: &YAxis, height: f32) -> f32 {
    let fraction = ((value - axis.min) / axis.span()).clamp(0.0, 1.0);
    height - fraction * height
}

fn distance(a: &PlotPoint, b: &PlotPoint) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}
