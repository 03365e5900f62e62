//! Line chart: process-wide element registry, chart description types and
//! the SVG renderer.

mod data;
mod line;
mod registry;

pub use data::{ChartData, ChartOptions, Dataset, Rgba};
pub use line::{label_stride, ChartLayout, LineChart, ValueScale};
pub use registry::{register, register_defaults, registry, ChartElement, ChartRegistry};
