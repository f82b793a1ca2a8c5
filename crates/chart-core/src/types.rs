// File: crates/chart-core/src/types.rs
// Summary: Shared layout types: margins, sizing policy and chart configuration.

use crate::geometry::Size;
use crate::theme::Theme;

/// Default outer width when no viewport is known.
pub const WIDTH: f64 = 1024.0;
/// Default outer height when no viewport is known.
pub const HEIGHT: f64 = 640.0;

/// Screen margins around the plot, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 20, 20, 30)
    }
}

/// How the drawing area is sized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sizing {
    /// Half of the viewport, captured once at mount. Later resizes are ignored.
    ViewportAtMount { width: f64, height: f64 },
    /// Fixed outer size in pixels.
    Static { width: f64, height: f64 },
    /// Outer size that follows the container; each resize rebuilds the scene.
    Observed { width: f64, height: f64 },
}

impl Sizing {
    /// Outer size of the chart region (plot plus margins).
    pub fn outer(&self) -> Size {
        match *self {
            Sizing::ViewportAtMount { width, height } => Size::new(width / 2.0, height / 2.0),
            Sizing::Static { width, height } | Sizing::Observed { width, height } => Size::new(width, height),
        }
    }

    /// Plot area inside the margins, clamped at zero.
    pub fn plot(&self, insets: &Insets) -> Size {
        let outer = self.outer();
        Size::new(
            (outer.width - insets.hsum() as f64).max(0.0),
            (outer.height - insets.vsum() as f64).max(0.0),
        )
    }

    pub fn observes_resize(&self) -> bool {
        matches!(self, Sizing::Observed { .. })
    }
}

impl Default for Sizing {
    fn default() -> Self {
        Sizing::ViewportAtMount { width: WIDTH * 2.0, height: HEIGHT * 2.0 }
    }
}

/// Everything about a chart that is not data or line style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub insets: Insets,
    pub sizing: Sizing,
    pub stroke_width: f64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    /// Tooltip offset from the pointer, in pixels.
    pub tooltip_offset: (f64, f64),
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            sizing: Sizing::default(),
            stroke_width: 1.5,
            tick_count: 10,
            tooltip_offset: (15.0, -28.0),
            theme: Theme::default(),
        }
    }
}
