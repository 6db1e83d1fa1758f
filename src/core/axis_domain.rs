use indexmap::IndexMap;

use crate::core::types::{DataSet, SeriesKind};

/// Headroom factor applied above the data maximum when Y-axis labels are
/// shown, so the top gradation clears the plotted series.
pub const Y_LABEL_HEADROOM: f64 = 1.4;

/// Counts datasets per render kind, in first-seen order.
pub fn count_series_kinds<'a, I>(datasets: I) -> IndexMap<SeriesKind, usize>
where
    I: IntoIterator<Item = &'a DataSet>,
{
    let mut counts = IndexMap::new();
    for set in datasets {
        *counts.entry(set.kind).or_insert(0) += 1;
    }
    counts
}

/// True when two or more datasets render as bars, which switches the axis
/// maximum to stacked accumulation.
pub fn has_multiple_bar_series<'a, I>(datasets: I) -> bool
where
    I: IntoIterator<Item = &'a DataSet>,
{
    count_series_kinds(datasets)
        .get(&SeriesKind::Bar)
        .copied()
        .unwrap_or(0)
        >= 2
}

/// Per-index sums across datasets. Shorter series simply stop contributing
/// past their last value.
pub fn stacked_totals<'a, I>(datasets: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a DataSet>,
{
    let mut totals: Vec<f64> = Vec::new();
    for set in datasets {
        if totals.len() < set.data.len() {
            totals.resize(set.data.len(), 0.0);
        }
        for (slot, value) in totals.iter_mut().zip(set.data.iter()) {
            *slot += value;
        }
    }
    totals
}

/// Largest single value across the flattened datasets; `-inf` when empty.
pub fn flat_max<'a, I>(datasets: I) -> f64
where
    I: IntoIterator<Item = &'a DataSet>,
{
    datasets
        .into_iter()
        .flat_map(|set| set.data.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest single value across the flattened datasets; `+inf` when empty.
pub fn flat_min<'a, I>(datasets: I) -> f64
where
    I: IntoIterator<Item = &'a DataSet>,
{
    datasets
        .into_iter()
        .flat_map(|set| set.data.iter().copied())
        .fold(f64::INFINITY, f64::min)
}

/// Scaled axis maximum for one dataset partition.
///
/// With `stacked` set (the multi-bar case) the maximum is taken over the
/// positional sums, supporting stacked-bar rendering; otherwise over single
/// values. Either way the headroom multiplier is applied.
pub fn axis_max<'a, I>(datasets: I, stacked: bool, multiplier: f64) -> f64
where
    I: IntoIterator<Item = &'a DataSet>,
{
    if stacked {
        return stacked_totals(datasets)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
            * multiplier;
    }

    flat_max(datasets) * multiplier
}

/// Baseline axis minimum for one dataset partition.
///
/// Bars always baseline at zero, as does any all-non-negative partition.
/// Otherwise the minimum is pushed down by the same padding the headroom
/// multiplier added on top, computed from `scaled_max` (the primary axis
/// maximum, even when this partition is the alternative one).
pub fn axis_min<'a, I>(datasets: I, any_bar_series: bool, scaled_max: f64, multiplier: f64) -> f64
where
    I: IntoIterator<Item = &'a DataSet>,
{
    let min = flat_min(datasets);

    if any_bar_series || min >= 0.0 {
        return 0.0;
    }

    min - (scaled_max - scaled_max / multiplier)
}
