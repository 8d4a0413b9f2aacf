use serde::{Deserialize, Serialize};

use crate::ensure_invariant;
use crate::error::Result;
use crate::geometry::Axis;
use crate::geometry::primitives::{Point, Span};

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure_invariant!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Builds the rectangle covering `along` on `axis` and `across` on the other axis.
    pub fn from_spans(axis: Axis, along: Span, across: Span) -> Result<Self> {
        match axis {
            Axis::Horizontal => Rect::try_new(along.lo, across.lo, along.hi, across.hi),
            Axis::Vertical => Rect::try_new(across.lo, along.lo, across.hi, along.hi),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Axis of the longest side, horizontal when both sides are equal.
    pub fn long_axis(&self) -> Axis {
        if self.width() >= self.height() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::Horizontal => Span::new(self.x_min, self.x_max),
            Axis::Vertical => Span::new(self.y_min, self.y_max),
        }
    }

    /// Returns the nominal dimensions `(L, P)`: long and short side rounded to whole centimeters.
    pub fn nominal_dims(&self) -> (u32, u32) {
        let (w, h) = (self.width(), self.height());
        (
            f64::max(w, h).round() as u32,
            f64::min(w, h).round() as u32,
        )
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    /// Cuts the rectangle in two with a line perpendicular to `axis` at coordinate `at`.
    /// Both halves share the cut line; together they cover `self` exactly.
    pub fn cut(&self, axis: Axis, at: f64) -> Result<(Rect, Rect)> {
        ensure_invariant!(
            self.span(axis).contains_strictly(at),
            "cut at {at} outside of {:?} span {:?}",
            axis,
            self.span(axis)
        );
        let pair = match axis {
            Axis::Horizontal => (
                Rect::try_new(self.x_min, self.y_min, at, self.y_max)?,
                Rect::try_new(at, self.y_min, self.x_max, self.y_max)?,
            ),
            Axis::Vertical => (
                Rect::try_new(self.x_min, self.y_min, self.x_max, at)?,
                Rect::try_new(self.x_min, at, self.x_max, self.y_max)?,
            ),
        };
        Ok(pair)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x_min: f64::min(self.x_min, other.x_min),
            y_min: f64::min(self.y_min, other.y_min),
            x_max: f64::max(self.x_max, other.x_max),
            y_max: f64::max(self.y_max, other.y_max),
        }
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// True when the interiors of both rectangles intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x_min < other.x_max
            && other.x_min < self.x_max
            && self.y_min < other.y_max
            && other.y_min < self.y_max
    }
}
