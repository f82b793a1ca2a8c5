// File: crates/chart-core/src/series.rs
// Summary: Series model: an ordered run of values indexed by position ("time").

use crate::error::ChartError;

/// Ordered, fixed-length sequence of values. The position is the x coordinate.
/// Equality is bitwise per value, so a series holding NaN still equals itself.
#[derive(Clone, Debug, Default)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn values(&self) -> &[f64] { &self.values }

    /// Last valid index, or `None` for an empty series.
    pub fn last_index(&self) -> Option<usize> {
        self.values.len().checked_sub(1)
    }

    /// `(index, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| (i as f64, v))
    }

    /// Minimum and maximum of the finite values. `None` when nothing finite is present.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in &self.values {
            if !v.is_finite() { continue; }
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo <= hi { Some((lo, hi)) } else { None }
    }

    pub fn value_at(&self, index: usize) -> Result<f64, ChartError> {
        self.values
            .get(index)
            .copied()
            .ok_or(ChartError::OutOfRangeIndex { index, len: self.values.len() })
    }
}

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self.values.iter().zip(&other.values).all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Series {}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self { Self::new(values) }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self { Self::new(values.to_vec()) }
}
