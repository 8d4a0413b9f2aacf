use serde::{Deserialize, Serialize};

/// Closed 1-D interval `[lo, hi]` along one axis.
/// A span with `hi <= lo` is empty and has zero length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    pub fn new(lo: f64, hi: f64) -> Self {
        Span { lo, hi }
    }

    pub fn length(&self) -> f64 {
        f64::max(0.0, self.hi - self.lo)
    }

    pub fn is_empty(&self) -> bool {
        self.hi <= self.lo
    }

    /// Strict interior test, the bounds themselves are not contained.
    pub fn contains_strictly(&self, v: f64) -> bool {
        self.lo < v && v < self.hi
    }

    pub fn shrink_lo(self, d: f64) -> Self {
        Span::new(self.lo + d, self.hi)
    }

    pub fn shrink_hi(self, d: f64) -> Self {
        Span::new(self.lo, self.hi - d)
    }
}
