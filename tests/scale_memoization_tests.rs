use chart_helpers_rs::api::ChartScales;
use chart_helpers_rs::core::{AxisLabelVisibility, ChartData, DataSet, SeriesKind};
use chart_helpers_rs::reactive::Signal;

fn fixture() -> ChartData {
    ChartData::new(
        vec!["a".to_owned(), "b".to_owned()],
        vec![DataSet::new("visits", SeriesKind::Line, vec![1.0, 5.0])],
    )
}

#[test]
fn second_read_is_a_cache_hit() {
    let scales = ChartScales::new(Signal::new(fixture()), None);

    let first = scales.max.get();
    let runs = scales.max.recompute_count();
    let second = scales.max.get();

    assert_eq!(first, second);
    assert_eq!(scales.max.recompute_count(), runs);

    let labels_first = scales.label_y_list.get();
    let label_runs = scales.label_y_list.recompute_count();
    assert_eq!(scales.label_y_list.get(), labels_first);
    assert_eq!(scales.label_y_list.recompute_count(), label_runs);
}

#[test]
fn reading_one_node_does_not_compute_unrelated_nodes() {
    let scales = ChartScales::new(Signal::new(fixture()), None);

    let _ = scales.max_data_points.get();

    assert_eq!(scales.label_y_list.recompute_count(), 0);
    assert_eq!(scales.alternative_max.recompute_count(), 0);
}

#[test]
fn label_flag_writes_leave_data_only_nodes_cached() {
    let labels = Signal::new(AxisLabelVisibility::default());
    let scales = ChartScales::new(Signal::new(fixture()), Some(labels.clone()));

    assert_eq!(scales.max_data_points.get(), 2);
    assert_eq!(scales.max.get(), 5.0);
    let points_runs = scales.max_data_points.recompute_count();
    let max_runs = scales.max.recompute_count();

    labels.set(AxisLabelVisibility { y: true, x: false });

    assert_eq!(scales.max_data_points.get(), 2);
    assert_eq!(scales.max_data_points.recompute_count(), points_runs);

    // The scale nodes do depend on the flags and pick up the new headroom.
    assert!((scales.max.get() - 7.0).abs() < 1e-9);
    assert_eq!(scales.max.recompute_count(), max_runs + 1);
}

#[test]
fn data_writes_mark_scale_nodes_stale() {
    let data = Signal::new(fixture());
    let scales = ChartScales::new(data.clone(), None);

    assert_eq!(scales.max.get(), 5.0);
    let runs = scales.max.recompute_count();

    data.update(|chart| chart.datasets[0].data.push(50.0));

    assert_eq!(scales.max.get(), 50.0);
    assert_eq!(scales.max.recompute_count(), runs + 1);
}

#[test]
fn constant_multiplier_survives_data_writes_without_recompute() {
    let data = Signal::new(fixture());
    let scales = ChartScales::new(data.clone(), None);

    assert_eq!(scales.multiplier.get(), 1.0);
    data.set(fixture());
    assert_eq!(scales.multiplier.get(), 1.0);
    assert_eq!(scales.multiplier.recompute_count(), 1);
}
