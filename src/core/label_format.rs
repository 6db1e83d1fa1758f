use smallvec::SmallVec;

/// Number of Y-axis gradations produced for every chart.
pub const TICK_LABEL_COUNT: usize = 5;

/// Fixed-cardinality tick label collection; stays inline, no heap allocation.
pub type TickLabelList = SmallVec<[String; TICK_LABEL_COUNT]>;

/// Builds the descending Y-axis tick labels from `max` down to `min`, both
/// ends inclusive.
///
/// `difference` is the span `max - min`; `max` doubles as the threshold that
/// switches whole-number formatting on. Non-finite inputs flow through the
/// arithmetic and the threshold comparisons untouched, so degenerate domains
/// produce visibly degenerate labels instead of failing.
#[must_use]
pub fn tick_label_list(difference: f64, min: f64, max: f64) -> TickLabelList {
    (0..TICK_LABEL_COUNT)
        .map(|step| {
            let value = difference - (difference / 4.0) * step as f64 + min;
            format_tick_value(value, max)
        })
        .collect()
}

fn format_tick_value(value: f64, max: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("{}m", round_whole(value / 1_000_000.0));
    }

    if value >= 1_000.0 {
        return format!("{}k", round_whole(value / 1_000.0));
    }

    if max > 20.0 {
        return round_whole(value);
    }

    format!("{value:.1}")
}

/// Rounds half away from zero and renders without a trailing fraction.
fn round_whole(value: f64) -> String {
    let rounded = value.round();
    if rounded.is_finite() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
