use chart_helpers_rs::api::ChartScales;
use chart_helpers_rs::core::{ChartData, DataSet, SeriesKind, TICK_LABEL_COUNT, tick_label_list};
use chart_helpers_rs::reactive::Signal;
use proptest::prelude::*;

proptest! {
    #[test]
    fn tick_label_list_always_emits_five_labels(
        span in -1.0e9f64..1.0e9,
        min in -1.0e9f64..1.0e9,
    ) {
        let labels = tick_label_list(span, min, span + min);
        prop_assert_eq!(labels.len(), TICK_LABEL_COUNT);
    }

    #[test]
    fn non_negative_data_keeps_a_zero_baseline(
        values in prop::collection::vec(0.0f64..1.0e6, 1..64),
    ) {
        let data = Signal::new(ChartData::new(
            Vec::new(),
            vec![DataSet::new("series", SeriesKind::Line, values)],
        ));
        let scales = ChartScales::new(data, None);
        prop_assert_eq!(scales.min.get(), 0.0);
    }

    #[test]
    fn stacked_maximum_covers_every_component_series(
        left in prop::collection::vec(0.0f64..1.0e6, 1..32),
        right in prop::collection::vec(0.0f64..1.0e6, 1..32),
    ) {
        let flat_top = left
            .iter()
            .chain(right.iter())
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let data = Signal::new(ChartData::new(
            Vec::new(),
            vec![
                DataSet::new("left", SeriesKind::Bar, left),
                DataSet::new("right", SeriesKind::Bar, right),
            ],
        ));
        let scales = ChartScales::new(data, None);
        prop_assert!(scales.max.get() >= flat_top);
    }

    #[test]
    fn difference_always_matches_the_extrema(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64),
    ) {
        let data = Signal::new(ChartData::new(
            Vec::new(),
            vec![DataSet::new("series", SeriesKind::Line, values)],
        ));
        let scales = ChartScales::new(data, None);
        prop_assert_eq!(scales.difference.get(), scales.max.get() - scales.min.get());
    }

    #[test]
    fn bar_charts_always_baseline_at_zero(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64),
    ) {
        let data = Signal::new(ChartData::new(
            Vec::new(),
            vec![DataSet::new("series", SeriesKind::Bar, values)],
        ));
        let scales = ChartScales::new(data, None);
        prop_assert_eq!(scales.min.get(), 0.0);
    }
}
