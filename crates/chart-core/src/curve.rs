// File: crates/chart-core/src/curve.rs
// Summary: Line path generation over (x, y) points with straight or basis-spline interpolation.

use std::fmt::Write as _;

use crate::geometry::Point;

/// Interpolation used between consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Straight segments through every point.
    #[default]
    Linear,
    /// Uniform cubic B-spline; approximates rather than passes through inner points.
    Basis,
}

impl Curve {
    pub fn from_smoothing(smoothing: bool) -> Self {
        if smoothing { Curve::Basis } else { Curve::Linear }
    }

    /// CSS class the original markup uses for each curve.
    pub fn class_name(&self) -> &'static str {
        match self {
            Curve::Linear => "line",
            Curve::Basis => "spline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { control1: Point, control2: Point, to: Point },
}

impl PathCommand {
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::CubicTo { to, .. } => to,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
    pub fn len(&self) -> usize { self.commands.len() }

    /// Points the pen stops at (segment end points, control points excluded).
    pub fn vertices(&self) -> Vec<Point> {
        self.commands.iter().map(PathCommand::end).collect()
    }

    /// Encode as SVG path data (`M`, `L`, `C`).
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            // Writing into a String cannot fail.
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", num(p.x), num(p.y)),
                PathCommand::LineTo(p) => write!(d, "L{},{}", num(p.x), num(p.y)),
                PathCommand::CubicTo { control1: a, control2: b, to } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    num(a.x), num(a.y), num(b.x), num(b.y), num(to.x), num(to.y)
                ),
            };
        }
        d
    }

    fn move_to(&mut self, p: Point) { self.commands.push(PathCommand::MoveTo(p)); }
    fn line_to(&mut self, p: Point) { self.commands.push(PathCommand::LineTo(p)); }
    fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo { control1, control2, to });
    }
}

/// Shortest decimal form, trimmed to three places.
fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 { "0".to_string() } else { format!("{rounded}") }
}

/// Build a path through already-projected pixel points.
pub fn line_path<I>(points: I, curve: Curve) -> Path
where
    I: IntoIterator<Item = Point>,
{
    match curve {
        Curve::Linear => linear(points),
        Curve::Basis => basis(points),
    }
}

fn linear<I: IntoIterator<Item = Point>>(points: I) -> Path {
    let mut path = Path::default();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 { path.move_to(p) } else { path.line_to(p) }
    }
    path
}

/// Uniform cubic B-spline. Each incoming point shifts a three-point window
/// `(p0, p1, p)`; a Bezier segment is emitted once the window is full, and the
/// last point is repeated at the end so the curve lands on it.
fn basis<I: IntoIterator<Item = Point>>(points: I) -> Path {
    let mut state = BasisState::default();
    for p in points {
        state.point(p);
    }
    state.finish()
}

#[derive(Default)]
struct BasisState {
    path: Path,
    seen: usize,
    p0: Point,
    p1: Point,
}

impl BasisState {
    fn point(&mut self, p: Point) {
        match self.seen {
            0 => self.path.move_to(p),
            1 => {}
            2 => {
                self.path.line_to(Point::blend(self.p0, 5.0, self.p1, 1.0, 6.0));
                bezier(&mut self.path, self.p0, self.p1, p);
            }
            _ => bezier(&mut self.path, self.p0, self.p1, p),
        }
        self.seen = (self.seen + 1).min(3);
        self.p0 = self.p1;
        self.p1 = p;
    }

    fn finish(mut self) -> Path {
        match self.seen {
            3 => {
                let last = self.p1;
                self.point(last);
                self.path.line_to(last);
            }
            2 => {
                let last = self.p1;
                self.path.line_to(last);
            }
            _ => {}
        }
        self.path
    }
}

fn bezier(path: &mut Path, p0: Point, p1: Point, p: Point) {
    path.cubic_to(
        Point::blend(p0, 2.0, p1, 1.0, 3.0),
        Point::blend(p0, 1.0, p1, 2.0, 3.0),
        Point::new((p0.x + 4.0 * p1.x + p.x) / 6.0, (p0.y + 4.0 * p1.y + p.y) / 6.0),
    );
}
