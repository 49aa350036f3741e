//! Charting collaborator abstraction
//!
//! A backend builds a chart instance from a config and tears it down again.
//! Instances are identified by opaque handles.

/// Slice colors, applied to categories in order and repeated past the end
pub const PALETTE: [&str; 6] = [
    "#ff6384", "#36a2eb", "#cc65fe", "#ffce56", "#4bc0c0", "#9966ff",
];

/// Label of the single dataset
pub const DATASET_LABEL: &str = "Expenses by category";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    /// Percentage of the total per label
    pub shares: Vec<f64>,
    pub palette: &'static [&'static str],
    pub legend: LegendPosition,
}

impl ChartConfig {
    /// Hex color for the slice at `index`
    pub fn color_for(&self, index: usize) -> &'static str {
        self.palette[index % self.palette.len()]
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Identifies a live chart instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartHandle(pub u64);

/// Builds and destroys chart instances
pub trait ChartBackend {
    fn construct(&mut self, config: ChartConfig) -> ChartHandle;

    fn destroy(&mut self, handle: ChartHandle);
}

/// Parse a `#rrggbb` color into its components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
