use chart_helpers_rs::style::{StaticStyleSource, StyleSource, css_rgb_var};

#[test]
fn triplet_property_formats_as_rgb() {
    let source = StaticStyleSource::new().with_property("--chart-accent", "10 20 30");
    assert_eq!(css_rgb_var(&source, "--chart-accent"), "rgb(10,20,30)");
}

#[test]
fn four_components_keep_the_alpha_channel() {
    let source = StaticStyleSource::new().with_property("--chart-accent", "10 20 30 0.5");
    assert_eq!(css_rgb_var(&source, "--chart-accent"), "rgb(10,20,30,0.5)");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let source = StaticStyleSource::new().with_property("--chart-accent", "  10 20 30\n");
    assert_eq!(css_rgb_var(&source, "--chart-accent"), "rgb(10,20,30)");
}

#[test]
fn unset_property_yields_an_empty_channel_list() {
    let source = StaticStyleSource::new();
    assert_eq!(css_rgb_var(&source, "--missing"), "rgb()");
}

#[test]
fn malformed_values_flow_through_unvalidated() {
    let source = StaticStyleSource::new().with_property("--chart-accent", "not a color");
    assert_eq!(css_rgb_var(&source, "--chart-accent"), "rgb(not,a,color)");
}

#[test]
fn later_writes_override_earlier_properties() {
    let mut source = StaticStyleSource::new().with_property("--chart-accent", "1 2 3");
    source.set_property("--chart-accent", "4 5 6");
    assert_eq!(source.resolved_property("--chart-accent"), "4 5 6");
}
