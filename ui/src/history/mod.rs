//! Recent concentration-test history: state, response handling and the
//! mapping to chart series.

mod chart_data;
mod controller;
mod effects;

pub use chart_data::{
    chart_data, chart_options, CHART_HEIGHT, CHART_WIDTH, ERROR_BACKGROUND, ERROR_BORDER,
    SUCCESS_BACKGROUND, SUCCESS_BORDER,
};
pub use controller::{
    AlertMessage, AttachFlag, Completion, Lifecycle, MountAction, RecentHistory, HISTORY_PATH,
    TEST_ENTRY_PATH,
};
pub use effects::{FetchFuture, HistoryEffects};

use api::ConcentrationTestRecord;

/// Past results, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryList(Vec<ConcentrationTestRecord>);

impl HistoryList {
    /// The backend sends newest first; charts read left to right.
    pub fn from_backend_order(mut records: Vec<ConcentrationTestRecord>) -> Self {
        records.reverse();
        Self(records)
    }

    pub fn records(&self) -> &[ConcentrationTestRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
