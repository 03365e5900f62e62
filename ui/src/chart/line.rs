use dioxus::prelude::*;
use tracing::warn;

use crate::core::format::format_score;
use crate::t;

use super::{registry, ChartData, ChartElement, ChartOptions, Dataset};

const AXIS_LEFT: f64 = 48.0;
const AXIS_RIGHT: f64 = 16.0;
const AXIS_TOP: f64 = 16.0;
const AXIS_BOTTOM: f64 = 36.0;
/// Horizontal room one x-axis label needs before labels start skipping.
const LABEL_SLOT_PX: f64 = 72.0;
const TARGET_TICKS: f64 = 5.0;

/// Plot area inside the SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: AXIS_LEFT,
            right: width - AXIS_RIGHT,
            top: AXIS_TOP,
            bottom: height - AXIS_BOTTOM,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Category position; a single point sits in the middle.
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.plot_width() / 2.0;
        }
        self.left + self.plot_width() * (index as f64 / (count - 1) as f64)
    }

    pub fn y_for(&self, value: f64, scale: &ValueScale) -> f64 {
        let span = (scale.max - scale.min).max(f64::EPSILON);
        self.bottom - self.plot_height() * ((value - scale.min) / span)
    }
}

/// Linear y-axis with "nice" tick spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueScale {
    /// Fit all finite values of `datasets`, always including zero.
    pub fn fit(datasets: &[Dataset]) -> Self {
        let values = datasets
            .iter()
            .flat_map(|set| set.data.iter().copied())
            .filter(|value| value.is_finite());

        let (lo, hi) = values.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let hi = if hi - lo < f64::EPSILON { lo + 1.0 } else { hi };

        let step = nice_step((hi - lo) / TARGET_TICKS);
        let min = (lo / step + 1e-9).floor() * step;
        let max = (hi / step - 1e-9).ceil() * step;
        Self { min, max, step }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Show every n-th x-axis label so they don't overlap.
pub fn label_stride(count: usize, plot_width: f64) -> usize {
    if count == 0 || plot_width <= 0.0 {
        return 1;
    }
    let fits = (plot_width / LABEL_SLOT_PX).floor().max(1.0) as usize;
    count.div_ceil(fits).max(1)
}

fn series_points(layout: &ChartLayout, scale: &ValueScale, data: &[f64]) -> Vec<(usize, f64, f64)> {
    data.iter()
        .enumerate()
        .filter(|(_, value)| value.is_finite())
        .map(|(i, value)| (i, layout.x_for(i, data.len()), layout.y_for(*value, scale)))
        .collect()
}

fn polyline(points: &[(usize, f64, f64)]) -> String {
    points
        .iter()
        .map(|(_, x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG line chart over category labels.
#[component]
pub fn LineChart(data: ChartData, options: ChartOptions, width: u32, height: u32) -> Element {
    let frame_style = if options.responsive {
        "width: 100%;".to_string()
    } else {
        format!("width: {width}px;")
    };

    let Some(registry) = registry().filter(|r| r.can_draw_lines()) else {
        warn!("line chart rendered without registered scales and line elements");
        return rsx! {
            div { class: "line-chart line-chart--unavailable", style: "{frame_style} height: {height}px;",
                {t!("chart-unavailable")}
            }
        };
    };

    let show_title = registry.has(ChartElement::Title);
    let show_legend = registry.has(ChartElement::Legend);
    let show_tooltip = registry.has(ChartElement::Tooltip);

    let layout = ChartLayout::new(width as f64, height as f64);
    let scale = ValueScale::fit(&data.datasets);
    let ticks = scale.ticks();
    let stride = label_stride(data.labels.len(), layout.plot_width());
    let label_count = data.labels.len();

    let (svg_width, svg_height) = if options.responsive {
        ("100%".to_string(), "auto".to_string())
    } else {
        (width.to_string(), height.to_string())
    };

    let grid: Vec<AxisMark> = ticks
        .iter()
        .map(|tick| {
            let y = layout.y_for(*tick, &scale);
            AxisMark {
                position: format!("{y:.1}"),
                text_position: format!("{:.1}", y + 4.0),
                text: format_score(*tick),
            }
        })
        .collect();

    let x_labels: Vec<AxisMark> = data
        .labels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, label)| AxisMark {
            position: format!("{:.1}", layout.x_for(i, label_count)),
            text_position: format!("{:.1}", layout.bottom + 20.0),
            text: label.clone(),
        })
        .collect();

    let series: Vec<SeriesPath> = data
        .datasets
        .iter()
        .map(|set| {
            let points = series_points(&layout, &scale, &set.data);
            SeriesPath {
                stroke: set.border_color.css(),
                fill: set.background_color.css(),
                path: polyline(&points),
                markers: points
                    .into_iter()
                    .map(|(i, x, y)| PointMarker {
                        cx: format!("{x:.1}"),
                        cy: format!("{y:.1}"),
                        tooltip_y: format!("{:.1}", y - 10.0),
                        tooltip: format!(
                            "{} · {}: {}",
                            data.labels.get(i).map(String::as_str).unwrap_or_default(),
                            set.label,
                            format_score(set.data[i])
                        ),
                    })
                    .collect(),
            }
        })
        .collect();

    let tick_x = layout.left - 8.0;

    rsx! {
        figure { class: "line-chart", style: "{frame_style}",
            if show_title {
                if let Some(title) = options.title.as_ref() {
                    figcaption { class: "line-chart__title", "{title}" }
                }
            }

            if show_legend {
                ul { class: "line-chart__legend",
                    for set in data.datasets.iter() {
                        li { class: "line-chart__legend-item",
                            span {
                                class: "line-chart__legend-swatch",
                                style: "background: {set.background_color.css()}; border-color: {set.border_color.css()};",
                            }
                            span { "{set.label}" }
                        }
                    }
                }
            }

            svg {
                class: "line-chart__canvas",
                width: "{svg_width}",
                height: "{svg_height}",
                view_box: "0 0 {width} {height}",

                for mark in grid.iter() {
                    line {
                        class: "line-chart__grid",
                        x1: "{layout.left}",
                        y1: "{mark.position}",
                        x2: "{layout.right}",
                        y2: "{mark.position}",
                    }
                    text {
                        class: "line-chart__tick",
                        x: "{tick_x}",
                        y: "{mark.text_position}",
                        "text-anchor": "end",
                        "{mark.text}"
                    }
                }

                for mark in x_labels.iter() {
                    text {
                        class: "line-chart__tick",
                        x: "{mark.position}",
                        y: "{mark.text_position}",
                        "text-anchor": "middle",
                        "{mark.text}"
                    }
                }

                for path in series.iter() {
                    g { class: "line-chart__series",
                        polyline {
                            "points": "{path.path}",
                            fill: "none",
                            stroke: "{path.stroke}",
                            "stroke-width": "2",
                        }
                        for marker in path.markers.iter() {
                            g { class: "line-chart__point",
                                circle {
                                    cx: "{marker.cx}",
                                    cy: "{marker.cy}",
                                    r: "4",
                                    fill: "{path.fill}",
                                    stroke: "{path.stroke}",
                                }
                                if show_tooltip {
                                    text {
                                        class: "line-chart__tooltip",
                                        x: "{marker.cx}",
                                        y: "{marker.tooltip_y}",
                                        "text-anchor": "middle",
                                        "{marker.tooltip}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct AxisMark {
    position: String,
    text_position: String,
    text: String,
}

struct SeriesPath {
    stroke: String,
    fill: String,
    path: String,
    markers: Vec<PointMarker>,
}

struct PointMarker {
    cx: String,
    cy: String,
    tooltip_y: String,
    tooltip: String,
}
