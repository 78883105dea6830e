use crate::{AlertMessage, ClockFace, DashboardData, DeviceStatus, HistoricalSeries, Reading};

/// Which widget a grid slot holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Temperature,
    Humidity,
    Device,
    Clock,
    Chart,
    Alert,
}

/// A widget of the dashboard grid.
#[derive(Clone, Debug, PartialEq)]
pub enum Card {
    Temperature(Reading),
    Humidity(Reading),
    Device(DeviceStatus),
    Clock(ClockFace),
    Chart {
        title: String,
        series: HistoricalSeries,
    },
    Alert(AlertMessage),
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Temperature(_) => CardKind::Temperature,
            Card::Humidity(_) => CardKind::Humidity,
            Card::Device(_) => CardKind::Device,
            Card::Clock(_) => CardKind::Clock,
            Card::Chart { .. } => CardKind::Chart,
            Card::Alert(_) => CardKind::Alert,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Card::Temperature(_) => "temperature",
            Card::Humidity(_) => "humidity",
            Card::Device(_) => "device",
            Card::Clock(_) => "clock",
            Card::Chart { .. } => "chart",
            Card::Alert(_) => "alert",
        }
    }

    /// Number of row tracks the card occupies in its column.
    pub fn row_span(&self) -> usize {
        match self {
            Card::Chart { .. } => 2,
            _ => 1,
        }
    }
}

/// Placement of one card inside its column's grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSlot {
    pub kind: CardKind,
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
}

/// Track counts of a column and the cards placed on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnGrid {
    pub columns: usize,
    pub rows: usize,
    pub slots: Vec<CardSlot>,
}

/// The two column grid.
///
/// The left column is a 2x2 grid of equally weighted cards, the right column
/// stacks the chart over the alert.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardLayout {
    pub left: [Card; 4],
    pub right: [Card; 2],
}

impl DashboardLayout {
    /// Width of the right column relative to the left one.
    pub const RIGHT_COLUMN_STRETCH: f32 = 1.5;

    pub fn compose(data: &DashboardData, clock: &ClockFace) -> Self {
        Self {
            left: [
                Card::Temperature(data.temperature),
                Card::Humidity(data.humidity),
                Card::Device(data.device.clone()),
                Card::Clock(clock.clone()),
            ],
            right: [
                Card::Chart {
                    title: data.chart_title.clone(),
                    series: data.history.clone(),
                },
                Card::Alert(data.alert.clone()),
            ],
        }
    }

    /// Row and column of a left column card, in reading order.
    pub fn left_cell(index: usize) -> (usize, usize) {
        (index / 2, index % 2)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.left.iter().chain(self.right.iter())
    }

    /// The left column's 2x2 grid, cards in reading order.
    pub fn left_grid(&self) -> ColumnGrid {
        let slots: Vec<CardSlot> = self
            .left
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let (row, col) = Self::left_cell(index);
                CardSlot {
                    kind: card.kind(),
                    row,
                    col,
                    row_span: card.row_span(),
                }
            })
            .collect();

        ColumnGrid {
            columns: 2,
            rows: slots.iter().map(|s| s.row + s.row_span).max().unwrap_or(0),
            slots,
        }
    }

    /// The right column, cards stacked top to bottom over their row spans.
    pub fn right_grid(&self) -> ColumnGrid {
        let mut row = 0;
        let slots = self
            .right
            .iter()
            .map(|card| {
                let slot = CardSlot {
                    kind: card.kind(),
                    row,
                    col: 0,
                    row_span: card.row_span(),
                };
                row += slot.row_span;
                slot
            })
            .collect();

        ColumnGrid {
            columns: 1,
            rows: row,
            slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data;

    fn layout() -> DashboardLayout {
        DashboardLayout::compose(&sample_data(), &ClockFace::default())
    }

    #[test]
    fn test_column_order() {
        let layout = layout();

        let left: Vec<_> = layout.left.iter().map(Card::name).collect();
        let right: Vec<_> = layout.right.iter().map(Card::name).collect();

        assert_eq!(left, ["temperature", "humidity", "device", "clock"]);
        assert_eq!(right, ["chart", "alert"]);
        assert_eq!(layout.cards().count(), 6);
    }

    #[test]
    fn test_right_column_tracks() {
        let layout = layout();

        assert_eq!(layout.right[0].row_span(), 2);
        assert_eq!(layout.right[1].row_span(), 1);
        assert!(layout.left.iter().all(|card| card.row_span() == 1));
    }

    #[test]
    fn test_left_grid() {
        let grid = layout().left_grid();

        assert_eq!((grid.columns, grid.rows), (2, 2));
        let placed: Vec<_> = grid.slots.iter().map(|s| (s.kind, s.row, s.col, s.row_span)).collect();
        assert_eq!(
            placed,
            [
                (CardKind::Temperature, 0, 0, 1),
                (CardKind::Humidity, 0, 1, 1),
                (CardKind::Device, 1, 0, 1),
                (CardKind::Clock, 1, 1, 1),
            ]
        );
    }

    #[test]
    fn test_right_grid() {
        let grid = layout().right_grid();

        assert_eq!((grid.columns, grid.rows), (1, 3));
        assert_eq!(
            grid.slots,
            [
                CardSlot { kind: CardKind::Chart, row: 0, col: 0, row_span: 2 },
                CardSlot { kind: CardKind::Alert, row: 2, col: 0, row_span: 1 },
            ]
        );
    }

    #[test]
    fn test_grid_follows_card_order() {
        let mut layout = layout();
        layout.left.swap(0, 3);

        let grid = layout.left_grid();
        assert_eq!(grid.slots[0].kind, CardKind::Clock);
        assert_eq!((grid.slots[3].kind, grid.slots[3].row, grid.slots[3].col), (CardKind::Temperature, 1, 1));
    }

    #[test]
    fn test_left_cells() {
        let cells: Vec<_> = (0..4).map(DashboardLayout::left_cell).collect();
        assert_eq!(cells, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_device_card_content() {
        let layout = layout();

        let Card::Device(device) = &layout.left[2] else {
            panic!("third card is not the device panel");
        };
        assert_eq!(device.name, "ESP32");
        assert_eq!(device.address, "192.168.1.150");
        assert_eq!(device.signal, "-65 dBm");
        assert_eq!(device.uptime, "2 days, 14 hours");
    }

    #[test]
    fn test_clock_card_carries_the_given_face() {
        let face = ClockFace {
            year: 2025,
            day: 13,
            month: "Mar".into(),
            time: "2:05".into(),
            period: "PM".into(),
        };
        let layout = DashboardLayout::compose(&sample_data(), &face);

        assert_eq!(layout.left[3], Card::Clock(face));
    }
}
