// File: crates/chart-core/src/tooltip.rs
// Summary: Pointer-to-index lookup (bisection + rounding) and tooltip content.

use tracing::trace;

use crate::error::ChartError;
use crate::geometry::Point;
use crate::scale::LinearScale;
use crate::series::Series;

/// First index in `lo..hi` whose value is not less than `x`, treating each
/// index as its own value (the implicit time axis).
pub fn bisect_left(x: f64, lo: usize, hi: usize) -> usize {
    let (mut lo, mut hi) = (lo, hi);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if (mid as f64) < x { lo = mid + 1; } else { hi = mid; }
    }
    lo
}

/// Result of mapping a pointer x back onto the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lookup {
    /// Inverted, unclamped domain coordinate under the pointer.
    pub fractional: f64,
    /// Closest neighbor found by bisection; ties go to the lower index.
    pub nearest: usize,
    /// Rounded and clamped index; this is what the tooltip reports.
    pub index: usize,
    /// Value read at `index` (not at `nearest`).
    pub value: f64,
    /// True when the rounded index had to be pulled back into range.
    pub clamped: bool,
}

/// Resolve plot pixel `px` to an index and value.
pub fn lookup(x: &LinearScale, series: &Series, px: f64) -> Result<Lookup, ChartError> {
    let last = series.last_index().ok_or(ChartError::EmptySeries)?;
    let fractional = x.invert(px);

    let nearest = if last == 0 {
        0
    } else {
        let i = bisect_left(fractional, 1, last).min(last);
        let (left, right) = (i - 1, i);
        if fractional - left as f64 > right as f64 - fractional { right } else { left }
    };

    let rounded = if fractional.is_finite() { fractional.round() } else { 0.0 };
    let index = rounded.clamp(0.0, last as f64) as usize;
    let clamped = rounded < 0.0 || rounded > last as f64;
    if clamped {
        trace!(px, fractional, index, "pointer outside series; index clamped");
    }
    let value = series.value_at(index)?;
    Ok(Lookup { fractional, nearest, index, value, clamped })
}

/// Floating label content and placement, in container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub time: usize,
    pub value: f64,
    pub position: Point,
    pub visible: bool,
}

impl Tooltip {
    pub fn hidden() -> Self {
        Self { time: 0, value: 0.0, position: Point::default(), visible: false }
    }

    pub fn time_line(&self) -> String { format!("Time: {}s", self.time) }
    pub fn data_line(&self) -> String { format!("Data: {:.2}m", self.value) }

    pub fn lines(&self) -> [String; 2] { [self.time_line(), self.data_line()] }

    /// Markup used by HTML hosts.
    pub fn html(&self) -> String { format!("{}<br>{}", self.time_line(), self.data_line()) }

    /// Show the label for `hit` at `position`.
    pub fn show(&mut self, hit: &Lookup, position: Point) {
        self.time = hit.index;
        self.value = hit.value;
        self.position = position;
        self.visible = true;
    }

    pub fn hide(&mut self) { self.visible = false; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisect_finds_insertion_point() {
        assert_eq!(bisect_left(0.2, 1, 4), 1);
        assert_eq!(bisect_left(1.0, 1, 4), 1);
        assert_eq!(bisect_left(1.4, 1, 4), 2);
        assert_eq!(bisect_left(9.0, 1, 4), 4);
    }

    #[test]
    fn nearest_prefers_lower_on_tie() {
        let s = Series::new(vec![0.0, 1.0, 2.0, 3.0]);
        let x = LinearScale::new((0.0, 3.0), (0.0, 300.0));
        assert_eq!(lookup(&x, &s, 150.0).map(|l| l.nearest), Ok(1));
        assert_eq!(lookup(&x, &s, 160.0).map(|l| l.nearest), Ok(2));
    }

    #[test]
    fn rounding_and_bisection_can_disagree() {
        // 1.5 rounds half away from zero to 2, while the tie picks neighbor 1.
        let s = Series::new(vec![5.0, 6.0, 7.0, 8.0]);
        let x = LinearScale::new((0.0, 3.0), (0.0, 300.0));
        let hit = lookup(&x, &s, 150.0).expect("lookup");
        assert_eq!((hit.nearest, hit.index, hit.value), (1, 2, 7.0));
    }

    #[test]
    fn outside_pixels_clamp() {
        let s = Series::new(vec![1.0, 2.0, 3.0]);
        let x = LinearScale::new((0.0, 2.0), (0.0, 100.0));
        let left = lookup(&x, &s, -40.0).expect("left");
        let right = lookup(&x, &s, 400.0).expect("right");
        assert_eq!((left.index, left.clamped), (0, true));
        assert_eq!((right.index, right.value, right.clamped), (2, 3.0, true));
    }

    #[test]
    fn empty_series_is_reported() {
        let x = LinearScale::new((0.0, 0.0), (0.0, 100.0));
        assert_eq!(lookup(&x, &Series::default(), 10.0), Err(ChartError::EmptySeries));
    }

    #[test]
    fn labels_use_two_decimals() {
        let mut t = Tooltip::hidden();
        let hit = Lookup { fractional: 2.0, nearest: 2, index: 2, value: 9.0, clamped: false };
        t.show(&hit, Point::new(1.0, 2.0));
        assert_eq!(t.lines(), ["Time: 2s".to_string(), "Data: 9.00m".to_string()]);
        assert_eq!(t.html(), "Time: 2s<br>Data: 9.00m");
    }
}
