// File: crates/chart-core/tests/lifecycle.rs
// Purpose: Mount/redraw/unmount discipline: the tooltip node never outlives its scene.

use chart_core::{Chart, ChartConfig, ChartProps, LineStyle, Sizing};

fn props() -> ChartProps {
    ChartProps::new(vec![10.0, 12.0, 9.0, 15.0], false, "steelblue")
}

#[test]
fn mount_attaches_one_hidden_tooltip() {
    let chart = Chart::mounted(props(), ChartConfig::default());
    assert!(chart.is_mounted());
    assert_eq!(chart.region().tooltip_count(), 1);
    assert!(!chart.tooltip().expect("tooltip").visible);
}

#[test]
fn redraws_never_leak_tooltips() {
    let mut chart = Chart::mounted(props(), ChartConfig::default());
    chart.pointer_move(100.0, 10.0);

    chart.set_style(LineStyle::new(true, "steelblue"));
    assert_eq!(chart.region().tooltip_count(), 1);
    chart.set_style(LineStyle::new(true, "red"));
    chart.set_series(vec![1.0, 2.0, 3.0]);
    for i in 0..20 {
        chart.set_series((0..i + 2).map(|v| v as f64).collect::<Vec<_>>());
        chart.pointer_move(5.0, 5.0);
    }
    assert_eq!(chart.region().len(), 1);
    assert_eq!(chart.region().tooltip_count(), 1);

    chart.unmount();
    assert_eq!(chart.region().tooltip_count(), 0);
    assert!(chart.scene().is_none());
    assert!(chart.tooltip().is_none());
}

#[test]
fn redraw_replaces_the_tooltip_node() {
    let mut chart = Chart::mounted(props(), ChartConfig::default());
    chart.pointer_move(50.0, 10.0);
    assert!(chart.tooltip().expect("tooltip").visible);
    chart.set_style(LineStyle::new(true, "red"));
    // A fresh node starts hidden.
    assert!(!chart.tooltip().expect("tooltip").visible);
}

#[test]
fn equal_props_keep_state() {
    let mut chart = Chart::mounted(props(), ChartConfig::default());
    chart.pointer_move(50.0, 10.0);
    chart.set_props(props());
    assert!(chart.tooltip().expect("tooltip").visible);
}

#[test]
fn equal_props_with_nan_keep_state() {
    let with_gap = || ChartProps::new(vec![10.0, f64::NAN, 9.0, 15.0], false, "steelblue");
    let mut chart = Chart::mounted(with_gap(), ChartConfig::default());
    chart.pointer_move(50.0, 10.0);
    assert!(chart.tooltip().expect("tooltip").visible);
    chart.set_props(with_gap());
    assert!(chart.tooltip().expect("tooltip").visible);
    assert_eq!(chart.region().tooltip_count(), 1);
}

#[test]
fn pointer_leave_hides_but_keeps_node() {
    let mut chart = Chart::mounted(props(), ChartConfig::default());
    chart.pointer_move(50.0, 10.0);
    chart.pointer_leave();
    assert!(!chart.tooltip().expect("tooltip").visible);
    assert_eq!(chart.region().tooltip_count(), 1);
}

#[test]
fn empty_series_mounts_without_scene() {
    let mut chart = Chart::mounted(ChartProps::new(Vec::<f64>::new(), false, "steelblue"), ChartConfig::default());
    assert!(chart.is_mounted());
    assert!(chart.scene().is_none());
    assert!(chart.pointer_move(10.0, 10.0).is_none());
    chart.set_series(vec![1.0, 2.0]);
    assert!(chart.scene().is_some());
}

#[test]
fn props_before_mount_are_applied_on_mount() {
    let mut chart = Chart::new(props(), ChartConfig::default());
    chart.set_series(vec![3.0, 1.0]);
    assert!(chart.scene().is_none());
    assert_eq!(chart.region().tooltip_count(), 0);
    chart.mount();
    assert_eq!(chart.scene().map(|s| s.x.domain), Some((0.0, 1.0)));
}

#[test]
fn fixed_sizing_ignores_resize() {
    let config = ChartConfig { sizing: Sizing::ViewportAtMount { width: 1200.0, height: 800.0 }, ..ChartConfig::default() };
    let mut chart = Chart::mounted(props(), config);
    let before = chart.scene().expect("scene").plot;
    assert!(!chart.resize(400.0, 300.0));
    assert_eq!(chart.scene().expect("scene").plot, before);
}

#[test]
fn observed_sizing_rebuilds_on_resize() {
    let config = ChartConfig { sizing: Sizing::Observed { width: 600.0, height: 400.0 }, ..ChartConfig::default() };
    let mut chart = Chart::mounted(props(), config);
    assert_eq!(chart.scene().expect("scene").plot.width, 530.0);
    assert!(chart.resize(800.0, 400.0));
    assert_eq!(chart.scene().expect("scene").plot.width, 730.0);
    assert_eq!(chart.scene().expect("scene").x.range, (0.0, 730.0));
    assert_eq!(chart.region().tooltip_count(), 1);
    assert!(!chart.resize(800.0, 400.0));
}
