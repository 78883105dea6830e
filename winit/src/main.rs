// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

use std::rc::Rc;

use env_dashboard_common::dashboard::{
    DashboardProvider, DashboardProviderPointer, StaticDashboardProvider,
};
use env_dashboard_common::{ClockDriver, SystemClock};
use env_dashboard_model::chart::HOVER_RADIUS;
use env_dashboard_model::{
    AlertMessage, Card, ChartGeometry, ClockFace, DashboardLayout, DeviceStatus, HistoricalSeries,
    Reading,
};

/// Our App struct that holds the UI.
///
/// All values except the clock are fixed when the App is created. The clock is
/// refreshed by a [`ClockDriver`] that only lives while [`App::run`] runs the
/// event loop, so no tick can reach a window that is gone.
struct App {
    ui: AppWindow,
}

impl App {
    /// Create a new App struct.
    ///
    /// Loads the dashboard data, composes the layout and pushes it into the view model.
    fn new() -> anyhow::Result<Self> {
        // Make a new AppWindow
        let ui = AppWindow::new()?;

        let provider: DashboardProviderPointer = Box::new(StaticDashboardProvider::new()?);
        let data = provider.dashboard()?;

        let layout = DashboardLayout::compose(&data, &ClockFace::now());
        Self::apply_layout(&ui, &layout);

        // The chart's path and hit testing depend on the plot size, which only the UI knows.
        let series = Rc::new(data.history);
        let path_series = series.clone();
        ui.global::<ViewModel>().on_plot_path(move |width, height| {
            ChartGeometry::new(&path_series, width, height).line_path().into()
        });
        ui.global::<ViewModel>().on_hover_point(move |x, y, width, height| {
            ChartGeometry::new(&series, width, height)
                .nearest_point(x, y, HOVER_RADIUS)
                .map_or(-1, |index| index as i32)
        });

        Ok(Self { ui })
    }

    /// Place the cards on the grid and route every card to its view model property.
    fn apply_layout(ui: &AppWindow, layout: &DashboardLayout) {
        let model = ui.global::<ViewModel>();

        model.set_left_grid((&layout.left_grid()).into());
        model.set_right_grid((&layout.right_grid()).into());
        model.set_right_column_stretch(DashboardLayout::RIGHT_COLUMN_STRETCH);

        for card in layout.cards() {
            log::debug!("Showing {} card", card.name());

            match card {
                Card::Temperature(reading) => model.set_temperature(reading.into()),
                Card::Humidity(reading) => model.set_humidity(reading.into()),
                Card::Device(device) => model.set_device(device.into()),
                Card::Clock(face) => model.set_clock(face.into()),
                Card::Chart { title, series } => {
                    model.set_chart_title(title.as_str().into());
                    let chart = ChartModels::from(series);
                    model.set_x_ticks(chart.x_ticks);
                    model.set_y_ticks(chart.y_ticks);
                    model.set_chart_points(chart.points);
                }
                Card::Alert(alert) => model.set_alert(alert.into()),
            }
        }
    }

    /// Run the App: mount the clock, run the event loop, unmount the clock.
    fn run(&mut self) -> anyhow::Result<()> {
        // Get the handle to the UI as a weak reference.
        let ui_handle = self.ui.as_weak();

        // Dropped at the end of this function, on every exit path.
        let mut clock = ClockDriver::mount(slint::Timer::default(), SystemClock, move |face| {
            match ui_handle.upgrade() {
                Some(ui) => ui.global::<ViewModel>().set_clock((&face).into()),
                None => log::debug!("Window is gone, skipping clock update"),
            }
        });

        // Run the UI (and map an error to an anyhow::Error).
        let result = self.ui.run();
        clock.unmount();

        result.map_err(|e| e.into())
    }
}

/// The chart's gridlines and points as fractions of the plot size.
struct ChartModels {
    x_ticks: slint::ModelRc<AxisTick>,
    y_ticks: slint::ModelRc<AxisTick>,
    points: slint::ModelRc<ChartPoint>,
}

impl From<&HistoricalSeries> for ChartModels {
    fn from(series: &HistoricalSeries) -> Self {
        let unit = ChartGeometry::new(series, 1.0, 1.0);

        let ticks = |ticks: Vec<env_dashboard_model::AxisTick>| {
            let ticks: Vec<AxisTick> = ticks
                .into_iter()
                .map(|tick| AxisTick {
                    label: tick.label.into(),
                    position: tick.position,
                })
                .collect();
            slint::ModelRc::from(Rc::new(slint::VecModel::from(ticks)))
        };

        let points: Vec<ChartPoint> = unit
            .points()
            .iter()
            .enumerate()
            .map(|(index, p)| ChartPoint {
                x: p.x,
                y: p.y,
                label: p.label.as_str().into(),
                tooltip: unit
                    .tooltip(index)
                    .map(|tooltip| tooltip.body.into())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            x_ticks: ticks(unit.x_ticks()),
            y_ticks: ticks(unit.y_ticks()),
            points: slint::ModelRc::from(Rc::new(slint::VecModel::from(points))),
        }
    }
}

impl From<env_dashboard_model::CardKind> for CardKind {
    fn from(kind: env_dashboard_model::CardKind) -> Self {
        use env_dashboard_model::CardKind as Kind;

        match kind {
            Kind::Temperature => CardKind::Temperature,
            Kind::Humidity => CardKind::Humidity,
            Kind::Device => CardKind::Device,
            Kind::Clock => CardKind::Clock,
            Kind::Chart => CardKind::Chart,
            Kind::Alert => CardKind::Alert,
        }
    }
}

impl From<&env_dashboard_model::ColumnGrid> for ColumnGrid {
    fn from(grid: &env_dashboard_model::ColumnGrid) -> Self {
        let slots: Vec<CardSlot> = grid
            .slots
            .iter()
            .map(|slot| CardSlot {
                kind: slot.kind.into(),
                row: slot.row as i32,
                col: slot.col as i32,
                rowspan: slot.row_span as i32,
            })
            .collect();

        Self {
            columns: grid.columns as i32,
            rows: grid.rows as i32,
            slots: slint::ModelRc::from(Rc::new(slint::VecModel::from(slots))),
        }
    }
}

impl From<&Reading> for MetricData {
    fn from(reading: &Reading) -> Self {
        Self {
            value: reading.value_text().into(),
            unit: reading.unit.symbol().into(),
            max: reading.max_text().into(),
            min: reading.min_text().into(),
        }
    }
}

impl From<&DeviceStatus> for DeviceData {
    fn from(device: &DeviceStatus) -> Self {
        Self {
            name: device.name.as_str().into(),
            address: device.address.as_str().into(),
            signal: device.signal.as_str().into(),
            uptime: device.uptime.as_str().into(),
        }
    }
}

impl From<&ClockFace> for ClockData {
    fn from(face: &ClockFace) -> Self {
        Self {
            year: face.year,
            day: face.day as i32,
            month: face.month.as_str().into(),
            time: face.time.as_str().into(),
            period: face.period.as_str().into(),
        }
    }
}

impl From<&AlertMessage> for AlertData {
    fn from(alert: &AlertMessage) -> Self {
        Self {
            title: alert.title.as_str().into(),
            body: alert.body.as_str().into(),
        }
    }
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting environment dashboard");

    let mut app = App::new()?;

    app.run()
}
