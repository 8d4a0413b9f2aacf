use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::ensure_invariant;
use crate::error::Result;
use crate::geometry::primitives::{Point, Rect};

/// Closed polygon: the first point is repeated as the last one.
/// Nearly all sofa pieces are axis-aligned rectangles, corner blocks are chamfered pentagons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Closes `points` if needed and checks that at least 3 distinct vertices remain.
    pub fn try_new(mut points: Vec<Point>) -> Result<Self> {
        if points.first() != points.last() {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        ensure_invariant!(
            points.len() >= 4,
            "polygon needs at least 3 vertices, got {}",
            points.len().saturating_sub(1)
        );
        Ok(Polygon { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vertices without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        &self.points[..self.points.len() - 1]
    }

    pub fn bbox(&self) -> Rect {
        let (x_min, x_max) = self
            .points
            .iter()
            .map(|p| p.x())
            .minmax()
            .into_option()
            .unwrap_or((0.0, 0.0));
        let (y_min, y_max) = self
            .points
            .iter()
            .map(|p| p.y())
            .minmax()
            .into_option()
            .unwrap_or((0.0, 0.0));
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Shoelace area, always positive.
    pub fn area(&self) -> f64 {
        let twice: f64 = self
            .points
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.x() * b.y() - b.x() * a.y())
            .sum();
        twice.abs() / 2.0
    }

    /// Nominal dimensions `(L, P)` of the bounding box, rounded to whole centimeters.
    pub fn nominal_dims(&self) -> (u32, u32) {
        self.bbox().nominal_dims()
    }

    pub fn is_axis_aligned_rect(&self) -> bool {
        let bbox = self.bbox();
        self.vertices().len() == 4
            && self.vertices().iter().all(|p| {
                (p.x() == bbox.x_min || p.x() == bbox.x_max)
                    && (p.y() == bbox.y_min || p.y() == bbox.y_max)
            })
    }
}

impl From<Rect> for Polygon {
    fn from(r: Rect) -> Self {
        let [a, b, c, d] = r.corners();
        Polygon {
            points: vec![a, b, c, d, a],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_polygon_is_closed() {
        let p = Polygon::from(Rect::try_new(0.0, 0.0, 10.0, 5.0).unwrap());
        assert_eq!(p.points().first(), p.points().last());
        assert_eq!(p.vertices().len(), 4);
        assert_eq!(p.area(), 50.0);
        assert!(p.is_axis_aligned_rect());
    }

    #[test]
    fn chamfered_square_area() {
        // 90x90 square with a 20x20 triangle cut off the inner corner
        let p = Polygon::try_new(vec![
            Point(0.0, 0.0),
            Point(90.0, 0.0),
            Point(90.0, 70.0),
            Point(70.0, 90.0),
            Point(0.0, 90.0),
        ])
        .unwrap();
        assert_eq!(p.area(), 90.0 * 90.0 - 200.0);
        assert_eq!(p.nominal_dims(), (90, 90));
        assert!(!p.is_axis_aligned_rect());
    }

    #[test]
    fn degenerate_polygon_rejected() {
        assert!(Polygon::try_new(vec![Point(0.0, 0.0), Point(1.0, 1.0)]).is_err());
    }
}
