// File: crates/chart-core/src/axis.rs
// Summary: Axis model: tick positions, labels and domain line for bottom/left axes.

use crate::scale::LinearScale;

/// Length of tick marks pointing away from the plot.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between the tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel offset along the axis (x for bottom, y for left).
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Pixel extent covered by the axis line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn bottom(scale: &LinearScale, count: usize) -> Self {
        Self::from_scale(AxisOrient::Bottom, scale, count)
    }

    pub fn left(scale: &LinearScale, count: usize) -> Self {
        Self::from_scale(AxisOrient::Left, scale, count)
    }

    fn from_scale(orient: AxisOrient, scale: &LinearScale, count: usize) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick { value, offset: scale.apply(value), label: format_tick(value, step) })
            .collect();
        Self { orient, range: scale.range, ticks }
    }

    /// Sign applied to tick lengths: bottom ticks grow down, left ticks grow left.
    pub fn direction(&self) -> f64 {
        match self.orient {
            AxisOrient::Bottom => 1.0,
            AxisOrient::Left => -1.0,
        }
    }

    /// SVG path for the domain line with outer ticks at both ends.
    pub fn domain_path(&self) -> String {
        let k = self.direction() * TICK_SIZE;
        let (r0, r1) = (self.range.0.min(self.range.1), self.range.0.max(self.range.1));
        match self.orient {
            AxisOrient::Bottom => format!("M{},{}V0.5H{}V{}", r0 + 0.5, k, r1 + 0.5, k),
            AxisOrient::Left => format!("M{},{}H0.5V{}H{}", k, r0 + 0.5, r1 + 0.5, k),
        }
    }
}

/// Format `value` with the number of decimals implied by the tick `step`,
/// grouping thousands with commas.
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let mut text = format!("{:.*}", precision, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    group_thousands(&text)
}

fn group_thousands(text: &str) -> String {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", text),
    };
    let (int, frac) = match rest.find('.') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{frac}")
}
