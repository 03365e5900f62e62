//! Chart description handed to [`super::LineChart`].

/// An `rgba(...)` color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One line on the chart. `data` is index-aligned with [`ChartData::labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: Rgba,
    pub background_color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// True when every dataset has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|set| set.data.len() == self.labels.len())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Scale with the container instead of using the fixed pixel size.
    pub responsive: bool,
    pub title: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_matches_chart_syntax() {
        assert_eq!(Rgba::new(0, 132, 255, 1.0).css(), "rgba(0, 132, 255, 1)");
        assert_eq!(Rgba::new(255, 84, 64, 0.5).css(), "rgba(255, 84, 64, 0.5)");
    }

    #[test]
    fn alignment_detects_short_series() {
        let color = Rgba::new(0, 0, 0, 1.0);
        let mut data = ChartData {
            labels: vec!["a".into(), "b".into()],
            datasets: vec![Dataset {
                label: "s".into(),
                data: vec![1.0, 2.0],
                border_color: color,
                background_color: color,
            }],
        };
        assert!(data.is_aligned());
        data.datasets[0].data.pop();
        assert!(!data.is_aligned());
    }
}
