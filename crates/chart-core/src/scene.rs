// File: crates/chart-core/src/scene.rs
// Summary: Derived scene (scales, axes, path, overlay) rebuilt from series + style on every mount.

use tracing::{debug, warn};

use crate::axis::Axis;
use crate::chart::LineStyle;
use crate::color::Color;
use crate::curve::{line_path, Curve, Path};
use crate::error::ChartError;
use crate::geometry::{Point, Size};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::tooltip::{self, Lookup};
use crate::types::{ChartConfig, Insets};

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Color as given by the caller; passed through untouched to markup outputs.
    pub css: String,
    /// Parsed color, `None` when `css` is not a valid color.
    pub color: Option<Color>,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub insets: Insets,
    /// Plot area; also the extent of the invisible pointer overlay.
    pub plot: Size,
    pub x: LinearScale,
    pub y: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub curve: Curve,
    pub path: Path,
    pub stroke: Stroke,
}

impl Scene {
    pub fn build(series: &Series, style: &LineStyle, config: &ChartConfig) -> Result<Self, ChartError> {
        let last = series.last_index().ok_or(ChartError::EmptySeries)?;
        let (lo, hi) = series.extent().ok_or(ChartError::EmptySeries)?;
        let plot = config.sizing.plot(&config.insets);

        let x = LinearScale::new((0.0, last as f64), (0.0, plot.width));
        let y = LinearScale::new((lo, hi), (plot.height, 0.0)).nice(config.tick_count);

        let curve = Curve::from_smoothing(style.smoothing);
        let points = series
            .points()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| Point::new(x.apply(i), y.apply(v)));
        let path = line_path(points, curve);

        let color = match Color::parse(&style.stroke) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!(error = %e, "stroke color not understood; line will not be visible");
                None
            }
        };

        debug!(points = series.len(), ?curve, width = plot.width, height = plot.height, y_domain = ?y.domain, "scene built");
        Ok(Self {
            insets: config.insets,
            plot,
            x_axis: Axis::bottom(&x, config.tick_count),
            y_axis: Axis::left(&y, config.tick_count),
            x,
            y,
            curve,
            path,
            stroke: Stroke { css: style.stroke.clone(), color, width: config.stroke_width },
        })
    }

    /// Plot plus margins.
    pub fn outer(&self) -> Size {
        Size::new(
            self.plot.width + self.insets.hsum() as f64,
            self.plot.height + self.insets.vsum() as f64,
        )
    }

    /// Plot-space point to container space.
    pub fn to_container(&self, p: Point) -> Point {
        Point::new(p.x + self.insets.left as f64, p.y + self.insets.top as f64)
    }

    /// Plot x pixel for a series index.
    pub fn x_for_index(&self, index: usize) -> f64 {
        self.x.apply(index as f64)
    }

    pub fn lookup(&self, series: &Series, px: f64) -> Result<Lookup, ChartError> {
        tooltip::lookup(&self.x, series, px)
    }
}
