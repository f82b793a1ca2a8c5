// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus UI for the line chart component and the side-by-side comparison page.
// Notes:
// - UI deps sit behind the `desktop` feature so the workspace builds without
//   fetching Dioxus unless explicitly enabled.
// - `view` is feature-free: it turns a mounted chart into plain strings, which
//   keeps the markup thin and testable without a webview.

pub mod view;

pub use view::{ChartView, Panel, PANELS};

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use chart_core::{Chart, ChartConfig, ChartProps, Series, Sizing};
    use dioxus::prelude::*;
    use dioxus_desktop::use_window;

    #[derive(Props, Clone)]
    pub struct LineChartProps {
        pub data: Vec<f64>,
        #[props(default)]
        pub use_spline: bool,
        #[props(into, default = "steelblue".to_string())]
        pub color: String,
        /// `ViewportAtMount` (the default) reads the real window size once at mount.
        #[props(default)]
        pub sizing: Sizing,
    }

    // `Vec<f64>` equality fails on NaN, which would re-render on every pass.
    impl PartialEq for LineChartProps {
        fn eq(&self, other: &Self) -> bool {
            Series::from(self.data.as_slice()) == Series::from(other.data.as_slice())
                && self.use_spline == other.use_spline
                && self.color == other.color
                && self.sizing == other.sizing
        }
    }

    /// Line chart rendered as inline SVG. The tooltip is a child of this
    /// component's own container and disappears with it.
    #[component]
    pub fn LineChart(props: LineChartProps) -> Element {
        let window = use_window();
        let sizing = match props.sizing {
            Sizing::ViewportAtMount { .. } => {
                let inner = window.window.inner_size().to_logical::<f64>(window.window.scale_factor());
                Sizing::ViewportAtMount { width: inner.width, height: inner.height }
            }
            other => other,
        };
        let observed = sizing.observes_resize();

        let series = Series::new(props.data.clone());
        let initial = ChartProps::new(series.clone(), props.use_spline, props.color.clone());
        let mut chart = use_signal(move || {
            Chart::mounted(initial, ChartConfig { sizing, ..ChartConfig::default() })
        });

        // Any input change tears the scene down and rebuilds it.
        use_effect(use_reactive(
            (&series, &props.use_spline, &props.color),
            move |(series, use_spline, color)| {
                chart.write().set_props(ChartProps::new(series, use_spline, color));
            },
        ));

        use_drop(move || {
            if let Ok(mut c) = chart.try_write() {
                c.unmount();
            }
        });

        let container_style = if observed {
            "position: relative; width: 100%; height: 100%; min-height: 120px;"
        } else {
            "position: relative; display: inline-block;"
        };
        let svg_style = if observed { "position: absolute; left: 0; top: 0;" } else { "" };

        let Some(view) = ChartView::from_chart(&chart.read()) else {
            return rsx! {
                div { class: "line-chart empty", style: "{container_style}" }
            };
        };

        rsx! {
            div {
                class: "line-chart",
                style: "{container_style}",
                onresize: move |evt| {
                    if !observed { return; }
                    if let Ok(size) = evt.data().get_border_box_size() {
                        chart.write().resize(size.width, size.height);
                    }
                },
                svg {
                    width: "{view.width}",
                    height: "{view.height}",
                    style: "{svg_style}",
                    g { transform: "{view.translate}",
                        AxisGroup { axis: view.x_axis.clone(), stroke: view.axis_color.clone(), label: view.label_color.clone() }
                        AxisGroup { axis: view.y_axis.clone(), stroke: view.axis_color.clone(), label: view.label_color.clone() }
                        path {
                            class: "{view.path_class}",
                            d: "{view.path_d}",
                            stroke: "{view.stroke}",
                            stroke_width: "{view.stroke_width}",
                            fill: "none",
                        }
                        rect {
                            width: "{view.plot_width}",
                            height: "{view.plot_height}",
                            fill: "none",
                            pointer_events: "all",
                            onmousemove: move |evt| {
                                let p = evt.element_coordinates();
                                chart.write().pointer_move(p.x, p.y);
                            },
                            onmouseleave: move |_| chart.write().pointer_leave(),
                        }
                    }
                }
                if let Some(tip) = view.tooltip.clone() {
                    div { class: "tooltip", style: "{tip.style}",
                        "{tip.time}"
                        br {}
                        "{tip.data}"
                    }
                }
            }
        }
    }

    #[component]
    fn AxisGroup(axis: view::AxisView, stroke: String, label: String) -> Element {
        rsx! {
            g {
                class: "{axis.class}",
                transform: "{axis.transform}",
                fill: "none",
                font_size: "10",
                font_family: "sans-serif",
                text_anchor: "{axis.anchor}",
                path { class: "domain", stroke: "{stroke}", d: "{axis.domain}" }
                for tick in axis.ticks.iter() {
                    g { key: "{tick.transform}", class: "tick", transform: "{tick.transform}",
                        line { stroke: "{stroke}", x2: "{tick.x2}", y2: "{tick.y2}" }
                        text { fill: "{label}", x: "{tick.text_x}", y: "{tick.text_y}", dy: "{tick.dy}", "{tick.label}" }
                    }
                }
            }
        }
    }

    /// Two charts over the same data, plain on the left and smoothed on the right.
    #[component]
    pub fn SplineComparison(data: Vec<f64>, #[props(default)] sizing: Sizing) -> Element {
        rsx! {
            div {
                div { style: "display: flex; justify-content: space-around;",
                    for panel in PANELS {
                        div { key: "{panel.heading}", style: "width: 50%;",
                            h2 { "{panel.heading}" }
                            LineChart { data: data.clone(), use_spline: panel.use_spline, color: panel.color, sizing }
                        }
                    }
                }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the page.
    #[allow(unreachable_code)]
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { SplineComparison { data: chart_core::sample::readings() } }
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,chart_core=debug")),
            )
            .try_init();
        tracing::info!("launching spline comparison window");

        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Spline Compare"));
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
