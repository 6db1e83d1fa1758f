pub mod axis_domain;
pub mod label_format;
pub mod types;

pub use axis_domain::{
    Y_LABEL_HEADROOM, axis_max, axis_min, count_series_kinds, flat_max, flat_min,
    has_multiple_bar_series, stacked_totals,
};
pub use label_format::{TICK_LABEL_COUNT, TickLabelList, tick_label_list};
pub use types::{AxisLabelVisibility, ChartData, DataSet, SeriesKind};
