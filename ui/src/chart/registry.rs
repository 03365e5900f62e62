//! Process-wide chart element registry.
//!
//! Shells call [`register_defaults`] once at startup (next to `i18n::init`);
//! [`super::LineChart`] only draws the parts whose elements were registered.

use std::collections::BTreeSet;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartElement {
    CategoryScale,
    LinearScale,
    PointElement,
    LineElement,
    Title,
    Tooltip,
    Legend,
}

/// Everything the recent-history chart uses.
pub const DEFAULT_ELEMENTS: [ChartElement; 7] = [
    ChartElement::CategoryScale,
    ChartElement::LinearScale,
    ChartElement::PointElement,
    ChartElement::LineElement,
    ChartElement::Title,
    ChartElement::Tooltip,
    ChartElement::Legend,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRegistry {
    elements: BTreeSet<ChartElement>,
}

impl ChartRegistry {
    pub fn with(elements: &[ChartElement]) -> Self {
        Self {
            elements: elements.iter().copied().collect(),
        }
    }

    pub fn has(&self, element: ChartElement) -> bool {
        self.elements.contains(&element)
    }

    /// Scales, points and lines are the minimum for a line chart.
    pub fn can_draw_lines(&self) -> bool {
        self.has(ChartElement::CategoryScale)
            && self.has(ChartElement::LinearScale)
            && self.has(ChartElement::PointElement)
            && self.has(ChartElement::LineElement)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

static REGISTRY: OnceCell<ChartRegistry> = OnceCell::new();

/// Register `elements` for the lifetime of the process.
///
/// Only the first call takes effect; it returns `true`, later calls `false`.
pub fn register(elements: &[ChartElement]) -> bool {
    let mut fresh = false;
    let registry = REGISTRY.get_or_init(|| {
        fresh = true;
        ChartRegistry::with(elements)
    });
    if fresh {
        info!(elements = registry.len(), "chart elements registered");
    } else {
        debug!("chart elements already registered; ignoring");
    }
    fresh
}

pub fn register_defaults() -> bool {
    register(&DEFAULT_ELEMENTS)
}

pub fn registry() -> Option<&'static ChartRegistry> {
    REGISTRY.get()
}
