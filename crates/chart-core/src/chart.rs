// File: crates/chart-core/src/chart.rs
// Summary: Chart lifecycle: owns props, the derived scene and the container-scoped tooltip node.

use tracing::{debug, warn};

use crate::error::ChartError;
use crate::geometry::Point;
use crate::region::{Node, NodeId, Region};
use crate::scene::Scene;
use crate::series::Series;
use crate::tooltip::{Lookup, Tooltip};
use crate::types::{ChartConfig, Sizing};

/// Display configuration for the single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineStyle {
    /// Basis-spline smoothing instead of straight segments.
    pub smoothing: bool,
    /// Any CSS color string.
    pub stroke: String,
}

impl LineStyle {
    pub fn new(smoothing: bool, stroke: impl Into<String>) -> Self {
        Self { smoothing, stroke: stroke.into() }
    }
}

impl Default for LineStyle {
    fn default() -> Self { Self::new(false, "steelblue") }
}

/// Inputs whose change triggers a full redraw.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ChartProps {
    pub series: Series,
    pub style: LineStyle,
}

impl ChartProps {
    pub fn new(series: impl Into<Series>, smoothing: bool, stroke: impl Into<String>) -> Self {
        Self { series: series.into(), style: LineStyle::new(smoothing, stroke) }
    }
}

pub struct Chart {
    pub config: ChartConfig,
    props: ChartProps,
    region: Region,
    mounted: bool,
    scene: Option<Scene>,
    tooltip: Option<NodeId>,
}

impl Chart {
    pub fn new(props: ChartProps, config: ChartConfig) -> Self {
        Self { config, props, region: Region::new(), mounted: false, scene: None, tooltip: None }
    }

    /// Build and mount in one step.
    pub fn mounted(props: ChartProps, config: ChartConfig) -> Self {
        let mut chart = Self::new(props, config);
        chart.mount();
        chart
    }

    pub fn props(&self) -> &ChartProps { &self.props }
    pub fn series(&self) -> &Series { &self.props.series }
    pub fn is_mounted(&self) -> bool { self.mounted }
    pub fn region(&self) -> &Region { &self.region }

    /// `None` while unmounted or when the series cannot be drawn.
    pub fn scene(&self) -> Option<&Scene> { self.scene.as_ref() }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self.tooltip.and_then(|id| self.region.get(id)) {
            Some(Node::Tooltip(t)) => Some(t),
            None => None,
        }
    }

    /// Build the scene and attach a hidden tooltip to this chart's region.
    /// Mounting twice first tears the previous scene down.
    pub fn mount(&mut self) {
        if self.mounted {
            self.teardown();
        }
        self.scene = match Scene::build(&self.props.series, &self.props.style, &self.config) {
            Ok(scene) => Some(scene),
            Err(ChartError::EmptySeries) => {
                warn!("series is empty; chart mounted without a scene");
                None
            }
            Err(e) => {
                warn!(error = %e, "scene build failed");
                None
            }
        };
        self.tooltip = Some(self.region.insert(Node::Tooltip(Tooltip::hidden())));
        self.mounted = true;
        debug!(points = self.props.series.len(), smoothing = self.props.style.smoothing, "chart mounted");
    }

    /// Replace inputs. Equal props keep the current scene; anything else
    /// tears down and rebuilds.
    pub fn set_props(&mut self, props: ChartProps) {
        if props == self.props {
            return;
        }
        self.props = props;
        if self.mounted {
            self.mount();
        }
    }

    pub fn set_series(&mut self, series: impl Into<Series>) {
        let props = ChartProps { series: series.into(), style: self.props.style.clone() };
        self.set_props(props);
    }

    pub fn set_style(&mut self, style: LineStyle) {
        let props = ChartProps { series: self.props.series.clone(), style };
        self.set_props(props);
    }

    /// Container resized. Only `Sizing::Observed` reacts; returns whether the scene was rebuilt.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let Sizing::Observed { width: w, height: h } = self.config.sizing else {
            debug!(width, height, "resize ignored; sizing is fixed");
            return false;
        };
        if w == width && h == height {
            return false;
        }
        self.config.sizing = Sizing::Observed { width, height };
        if self.mounted {
            self.mount();
        }
        true
    }

    /// Pointer moved to plot coordinates `(px, py)`. Shows the tooltip and returns the hit.
    pub fn pointer_move(&mut self, px: f64, py: f64) -> Option<Lookup> {
        let scene = self.scene.as_ref()?;
        let hit = match scene.lookup(&self.props.series, px) {
            Ok(hit) => hit,
            Err(e) => {
                debug!(error = %e, "pointer lookup skipped");
                return None;
            }
        };
        let (dx, dy) = self.config.tooltip_offset;
        let anchor = scene.to_container(Point::new(px + dx, py + dy));
        if let Some(Node::Tooltip(t)) = self.tooltip.and_then(|id| self.region.get_mut(id)) {
            t.show(&hit, anchor);
        }
        Some(hit)
    }

    pub fn pointer_leave(&mut self) {
        if let Some(Node::Tooltip(t)) = self.tooltip.and_then(|id| self.region.get_mut(id)) {
            t.hide();
        }
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            self.teardown();
            self.mounted = false;
            debug!("chart unmounted");
        }
    }

    /// Drop the scene and remove (not hide) the tooltip node.
    fn teardown(&mut self) {
        self.scene = None;
        if let Some(id) = self.tooltip.take() {
            self.region.remove(id);
        }
    }
}

impl Drop for Chart {
    fn drop(&mut self) {
        self.unmount();
    }
}
