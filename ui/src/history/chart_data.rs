use crate::chart::{ChartData, ChartOptions, Dataset, Rgba};
use crate::t;

use super::HistoryList;

pub const CHART_WIDTH: u32 = 1132;
pub const CHART_HEIGHT: u32 = 300;

pub const SUCCESS_BORDER: Rgba = Rgba::new(0, 132, 255, 1.0);
pub const SUCCESS_BACKGROUND: Rgba = Rgba::new(0, 132, 255, 0.5);
pub const ERROR_BORDER: Rgba = Rgba::new(255, 84, 64, 1.0);
pub const ERROR_BACKGROUND: Rgba = Rgba::new(255, 84, 64, 0.5);

/// Labels and the two score series, straight from `history` with no scaling.
pub fn chart_data(history: &HistoryList) -> ChartData {
    let records = history.records();

    ChartData {
        labels: records.iter().map(|test| test.test_date.clone()).collect(),
        datasets: vec![
            Dataset {
                label: t!("chart-series-success"),
                data: records.iter().map(|test| test.measurement_score).collect(),
                border_color: SUCCESS_BORDER,
                background_color: SUCCESS_BACKGROUND,
            },
            Dataset {
                label: t!("chart-series-error"),
                data: records.iter().map(|test| test.error_count).collect(),
                border_color: ERROR_BORDER,
                background_color: ERROR_BACKGROUND,
            },
        ],
    }
}

/// The history chart keeps its fixed pixel size.
pub fn chart_options() -> ChartOptions {
    ChartOptions {
        responsive: false,
        title: None,
    }
}
