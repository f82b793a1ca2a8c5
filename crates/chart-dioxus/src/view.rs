// File: crates/chart-dioxus/src/view.rs
// Summary: Flattens a mounted chart into owned strings the component markup binds to.

use chart_core::axis::{Axis, AxisOrient, TICK_PADDING, TICK_SIZE};
use chart_core::{Chart, Theme, Tooltip};

#[derive(Clone, Debug, PartialEq)]
pub struct TickView {
    pub transform: String,
    pub x2: f64,
    pub y2: f64,
    pub text_x: f64,
    pub text_y: f64,
    pub dy: &'static str,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisView {
    pub class: &'static str,
    pub transform: String,
    pub anchor: &'static str,
    pub domain: String,
    pub ticks: Vec<TickView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    pub style: String,
    pub time: String,
    pub data: String,
}

/// Everything the `LineChart` markup needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub width: f64,
    pub height: f64,
    pub translate: String,
    pub plot_width: f64,
    pub plot_height: f64,
    pub x_axis: AxisView,
    pub y_axis: AxisView,
    pub path_class: &'static str,
    pub path_d: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub axis_color: String,
    pub label_color: String,
    /// Present only while the tooltip is visible.
    pub tooltip: Option<TooltipView>,
}

impl ChartView {
    /// `None` when the chart has no scene (unmounted or empty series).
    pub fn from_chart(chart: &Chart) -> Option<Self> {
        let scene = chart.scene()?;
        let theme = &chart.config.theme;
        let outer = scene.outer();
        Some(Self {
            width: outer.width,
            height: outer.height,
            translate: format!("translate({},{})", scene.insets.left, scene.insets.top),
            plot_width: scene.plot.width,
            plot_height: scene.plot.height,
            x_axis: axis_view(&scene.x_axis, scene.plot.height),
            y_axis: axis_view(&scene.y_axis, scene.plot.height),
            path_class: scene.curve.class_name(),
            path_d: scene.path.to_svg_data(),
            stroke: scene.stroke.css.clone(),
            stroke_width: scene.stroke.width,
            axis_color: theme.axis_line.to_css(),
            label_color: theme.axis_label.to_css(),
            tooltip: chart.tooltip().filter(|t| t.visible).map(|t| tooltip_view(t, theme)),
        })
    }
}

fn axis_view(axis: &Axis, plot_height: f64) -> AxisView {
    let k = axis.direction() * TICK_SIZE;
    let gap = axis.direction() * (TICK_SIZE + TICK_PADDING);
    let (class, transform, anchor) = match axis.orient {
        AxisOrient::Bottom => ("x axis", format!("translate(0,{plot_height})"), "middle"),
        AxisOrient::Left => ("y axis", String::new(), "end"),
    };
    let ticks = axis
        .ticks
        .iter()
        .map(|t| match axis.orient {
            AxisOrient::Bottom => TickView {
                transform: format!("translate({},0)", t.offset + 0.5),
                x2: 0.0,
                y2: k,
                text_x: 0.0,
                text_y: gap,
                dy: "0.71em",
                label: t.label.clone(),
            },
            AxisOrient::Left => TickView {
                transform: format!("translate(0,{})", t.offset + 0.5),
                x2: k,
                y2: 0.0,
                text_x: gap,
                text_y: 0.0,
                dy: "0.32em",
                label: t.label.clone(),
            },
        })
        .collect();
    AxisView { class, transform, anchor, domain: axis.domain_path(), ticks }
}

/// Inline style for the container-scoped tooltip box.
pub fn tooltip_style(t: &Tooltip, theme: &Theme) -> String {
    format!(
        "position: absolute; left: {}px; top: {}px; background: {}; border: 1px solid {}; color: {}; \
         padding: 5px; pointer-events: none; white-space: nowrap; display: {};",
        t.position.x,
        t.position.y,
        theme.tooltip_background,
        theme.tooltip_border,
        theme.tooltip_text,
        if t.visible { "block" } else { "none" },
    )
}

fn tooltip_view(t: &Tooltip, theme: &Theme) -> TooltipView {
    TooltipView { style: tooltip_style(t, theme), time: t.time_line(), data: t.data_line() }
}

/// One column of the comparison page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panel {
    pub heading: &'static str,
    pub use_spline: bool,
    pub color: &'static str,
}

/// Same data, opposite smoothing, distinct colors.
pub const PANELS: [Panel; 2] = [
    Panel { heading: "Without Spline", use_spline: false, color: "steelblue" },
    Panel { heading: "With Spline", use_spline: true, color: "red" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::{ChartConfig, ChartProps, Sizing};

    fn chart(smoothing: bool) -> Chart {
        let config = ChartConfig { sizing: Sizing::Static { width: 370.0, height: 350.0 }, ..ChartConfig::default() };
        Chart::mounted(ChartProps::new(vec![10.0, 12.0, 9.0, 15.0], smoothing, "steelblue"), config)
    }

    #[test]
    fn view_mirrors_scene() {
        let view = ChartView::from_chart(&chart(false)).expect("view");
        assert_eq!((view.width, view.height), (370.0, 350.0));
        assert_eq!(view.translate, "translate(50,20)");
        assert_eq!(view.path_class, "line");
        assert!(view.path_d.starts_with('M'));
        assert_eq!(view.x_axis.class, "x axis");
        assert_eq!(view.x_axis.transform, "translate(0,300)");
        assert_eq!(view.y_axis.anchor, "end");
        assert!(view.tooltip.is_none());
    }

    #[test]
    fn visible_tooltip_is_projected() {
        let mut c = chart(true);
        let px = c.scene().expect("scene").x_for_index(2);
        c.pointer_move(px, 30.0);
        let view = ChartView::from_chart(&c).expect("view");
        let tip = view.tooltip.expect("tooltip");
        assert_eq!(tip.time, "Time: 2s");
        assert_eq!(tip.data, "Data: 9.00m");
        assert!(tip.style.contains("position: absolute"));
        assert!(tip.style.contains("#f9f9f9"));
        assert_eq!(view.path_class, "spline");
    }

    #[test]
    fn unmounted_chart_has_no_view() {
        let mut c = chart(false);
        c.unmount();
        assert!(ChartView::from_chart(&c).is_none());
    }

    #[test]
    fn panels_differ_only_in_style() {
        assert_ne!(PANELS[0].use_spline, PANELS[1].use_spline);
        assert_ne!(PANELS[0].color, PANELS[1].color);
    }
}
