// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, lifecycle and renderers.

pub mod axis;
pub mod chart;
pub mod color;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod region;
pub mod render;
pub mod sample;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use chart::{Chart, ChartProps, LineStyle};
pub use color::Color;
pub use curve::{Curve, Path, PathCommand};
pub use error::ChartError;
pub use geometry::{Point, Size};
pub use region::{Node, NodeId, Region};
pub use render::RenderOptions;
pub use scale::LinearScale;
pub use scene::Scene;
pub use series::Series;
pub use theme::Theme;
pub use tooltip::{Lookup, Tooltip};
pub use types::{ChartConfig, Insets, Sizing};
