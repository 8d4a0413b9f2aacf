use serde::{Deserialize, Serialize};

use crate::entities::{Junction, Side};
use crate::geometry::Axis;
use crate::geometry::primitives::{Point, Polygon, Rect, Span};

/// End of a branch along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum End {
    /// Smallest coordinate (left end of a horizontal branch, bottom end of a vertical one)
    Low,
    High,
}

/// A contiguous run of seating and the anchors derived for it.
///
/// Coordinates along the branch axis are expressed as [`Span`]s, the `strip` spans run across it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub side: Side,
    pub axis: Axis,
    /// Footprint of the banquette before splitting
    pub seat: Rect,
    /// Where the back cushions may go along the axis, from the frame corner to the end of the
    /// branch (or the chaise)
    pub run: Span,
    /// Where the back cushions sit across the axis
    pub cushion_strip: Span,
    /// Where a bolster sits across the axis
    pub bolster_strip: Span,
    /// Full backrest panel behind the branch, already shortened by a chaise
    pub backrest: Option<Rect>,
    /// Coordinates along the axis where the backrest is cut into corner and bench segments
    pub backrest_cuts: Vec<f64>,
    pub armrests: Vec<Rect>,
    /// Ends carrying an armrest, chaise or bolster, with the requested side they answer to
    pub free_ends: Vec<(End, Side)>,
}

impl Branch {
    pub fn seat_span(&self) -> Span {
        self.seat.span(self.axis)
    }

    pub fn free_end(&self, side: Side) -> Option<End> {
        self.free_ends
            .iter()
            .find(|(_, s)| *s == side)
            .map(|(e, _)| *e)
    }
}

/// Where a side branch meets the bottom branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionAnchors {
    /// `Left` or `Right`
    pub side: Side,
    pub kind: Junction,
    /// Inner frame corner shared by the two branches
    pub frame_corner: Point,
    /// Chamfered corner block, for [`Junction::Corner`] only
    pub block: Option<Polygon>,
}
