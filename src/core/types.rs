use serde::{Deserialize, Serialize};

/// Render style of one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Bar,
    Area,
}

/// One named numeric series within a chart.
///
/// `is_alternative` moves the series onto the secondary overlay axis, which
/// keeps its own min/max domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<f64>,
    #[serde(default)]
    pub is_alternative: bool,
}

impl DataSet {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind,
            data,
            is_alternative: false,
        }
    }

    #[must_use]
    pub fn with_alternative_axis(mut self) -> Self {
        self.is_alternative = true;
        self
    }
}

/// Chart input: ordered X-axis labels plus the datasets drawn against them.
///
/// Owned by the host; everything derived from it in this crate is a pure
/// projection over an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DataSet>,
}

impl ChartData {
    #[must_use]
    pub fn new(labels: Vec<String>, datasets: Vec<DataSet>) -> Self {
        Self { labels, datasets }
    }

    /// Datasets scaled against the primary Y axis.
    pub fn primary_datasets(&self) -> impl Iterator<Item = &DataSet> {
        self.datasets.iter().filter(|set| !set.is_alternative)
    }

    /// Datasets scaled against the secondary overlay axis.
    pub fn alternative_datasets(&self) -> impl Iterator<Item = &DataSet> {
        self.datasets.iter().filter(|set| set.is_alternative)
    }

    /// Longest series length; `0` when no datasets are present.
    #[must_use]
    pub fn max_data_points(&self) -> usize {
        self.datasets
            .iter()
            .map(|set| set.data.len())
            .max()
            .unwrap_or(0)
    }
}

/// Which axis label gutters the host renders next to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabelVisibility {
    #[serde(default)]
    pub y: bool,
    #[serde(default)]
    pub x: bool,
}
