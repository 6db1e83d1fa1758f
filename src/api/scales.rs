use tracing::debug;

use crate::core::{
    AxisLabelVisibility, ChartData, SeriesKind, TickLabelList, Y_LABEL_HEADROOM, axis_max,
    axis_min, has_multiple_bar_series, tick_label_list,
};
use crate::reactive::{Computed, Signal};

/// Bundle of derived scale values for one chart's data reference.
///
/// Holds everything a rendering layer needs to place series and Y-axis
/// gradations: primary and alternative domain extrema, their spans, the
/// formatted tick labels, and the dataset metadata flags. Every field is an
/// independently memoized node; reading one never recomputes a node it does
/// not feed, and re-reading with unchanged sources is a cache hit.
///
/// The alternative axis keeps its own extrema, with one carried-over quirk:
/// the primary `max` feeds the alternative minimum's padding formula and the
/// alternative tick list's formatting threshold.
pub struct ChartScales {
    pub max_data_points: Computed<usize>,
    /// Headroom factor from the Y-label visibility flag.
    pub multiplier: Computed<f64>,
    pub has_bar_chart: Computed<bool>,
    pub has_alternative_dataset: Computed<bool>,
    /// Two or more bar datasets; switches the maxima to stacked accumulation.
    pub has_multiple_bar_types: Computed<bool>,
    pub max: Computed<f64>,
    pub alternative_max: Computed<f64>,
    pub min: Computed<f64>,
    pub alternative_min: Computed<f64>,
    pub difference: Computed<f64>,
    pub alternative_difference: Computed<f64>,
    pub first_label: Computed<Option<String>>,
    pub last_label: Computed<Option<String>>,
    pub label_y_list: Computed<TickLabelList>,
    pub alternative_label_y_list: Computed<TickLabelList>,
}

impl ChartScales {
    /// Wires the derived-value graph over a chart-data signal and optional
    /// axis-label visibility flags.
    ///
    /// Nodes that only read the data signal ignore label-flag writes
    /// entirely; scale nodes depend on both. Without a label signal the
    /// multiplier is the constant `1.0`.
    #[must_use]
    pub fn new(data: Signal<ChartData>, labels: Option<Signal<AxisLabelVisibility>>) -> Self {
        let data_revision = data.revision_cell();
        let scale_dependencies = || {
            let mut dependencies = vec![data_revision.clone()];
            if let Some(flags) = &labels {
                dependencies.push(flags.revision_cell());
            }
            dependencies
        };

        let max_data_points = {
            let data = data.clone();
            Computed::new("max_data_points", [data_revision.clone()], move || {
                data.with(ChartData::max_data_points)
            })
        };

        let multiplier = {
            let flags = labels.clone();
            Computed::new(
                "multiplier",
                labels.iter().map(|flags| flags.revision_cell()),
                move || {
                    flags.as_ref().map_or(1.0, |flags| {
                        if flags.get().y { Y_LABEL_HEADROOM } else { 1.0 }
                    })
                },
            )
        };

        let has_bar_chart = {
            let data = data.clone();
            Computed::new("has_bar_chart", [data_revision.clone()], move || {
                data.with(|chart| chart.datasets.iter().any(|set| set.kind == SeriesKind::Bar))
            })
        };

        let has_alternative_dataset = {
            let data = data.clone();
            Computed::new("has_alternative_dataset", [data_revision.clone()], move || {
                data.with(|chart| chart.datasets.iter().any(|set| set.is_alternative))
            })
        };

        let has_multiple_bar_types = {
            let data = data.clone();
            Computed::new("has_multiple_bar_types", [data_revision.clone()], move || {
                data.with(|chart| has_multiple_bar_series(&chart.datasets))
            })
        };

        let max = {
            let data = data.clone();
            let stacked = has_multiple_bar_types.clone();
            let multiplier = multiplier.clone();
            Computed::new("max", scale_dependencies(), move || {
                let stacked = stacked.get();
                let multiplier = multiplier.get();
                data.with(|chart| axis_max(chart.primary_datasets(), stacked, multiplier))
            })
        };

        let alternative_max = {
            let data = data.clone();
            let stacked = has_multiple_bar_types.clone();
            let multiplier = multiplier.clone();
            Computed::new("alternative_max", scale_dependencies(), move || {
                let stacked = stacked.get();
                let multiplier = multiplier.get();
                data.with(|chart| axis_max(chart.alternative_datasets(), stacked, multiplier))
            })
        };

        let min = {
            let data = data.clone();
            let any_bar = has_bar_chart.clone();
            let primary_max = max.clone();
            let multiplier = multiplier.clone();
            Computed::new("min", scale_dependencies(), move || {
                let any_bar = any_bar.get();
                let primary_max = primary_max.get();
                let multiplier = multiplier.get();
                data.with(|chart| {
                    axis_min(chart.primary_datasets(), any_bar, primary_max, multiplier)
                })
            })
        };

        let alternative_min = {
            let data = data.clone();
            let any_bar = has_bar_chart.clone();
            // Padding for the alternative minimum is computed from the
            // primary maximum, not the alternative one.
            let primary_max = max.clone();
            let multiplier = multiplier.clone();
            Computed::new("alternative_min", scale_dependencies(), move || {
                let any_bar = any_bar.get();
                let primary_max = primary_max.get();
                let multiplier = multiplier.get();
                data.with(|chart| {
                    axis_min(chart.alternative_datasets(), any_bar, primary_max, multiplier)
                })
            })
        };

        let difference = {
            let max = max.clone();
            let min = min.clone();
            Computed::new("difference", scale_dependencies(), move || {
                max.get() - min.get()
            })
        };

        let alternative_difference = {
            let max = alternative_max.clone();
            let min = alternative_min.clone();
            Computed::new("alternative_difference", scale_dependencies(), move || {
                max.get() - min.get()
            })
        };

        let first_label = {
            let data = data.clone();
            Computed::new("first_label", [data_revision.clone()], move || {
                data.with(|chart| chart.labels.first().cloned())
            })
        };

        let last_label = {
            let data = data.clone();
            Computed::new("last_label", [data_revision.clone()], move || {
                data.with(|chart| chart.labels.last().cloned())
            })
        };

        let label_y_list = {
            let difference = difference.clone();
            let min = min.clone();
            let max = max.clone();
            Computed::new("label_y_list", scale_dependencies(), move || {
                tick_label_list(difference.get(), min.get(), max.get())
            })
        };

        let alternative_label_y_list = {
            let difference = alternative_difference.clone();
            let min = alternative_min.clone();
            // Formatting threshold stays the primary maximum here as well.
            let max = max.clone();
            Computed::new("alternative_label_y_list", scale_dependencies(), move || {
                tick_label_list(difference.get(), min.get(), max.get())
            })
        };

        debug!(
            has_label_flags = labels.is_some(),
            "constructed chart scale graph"
        );

        Self {
            max_data_points,
            multiplier,
            has_bar_chart,
            has_alternative_dataset,
            has_multiple_bar_types,
            max,
            alternative_max,
            min,
            alternative_min,
            difference,
            alternative_difference,
            first_label,
            last_label,
            label_y_list,
            alternative_label_y_list,
        }
    }
}
