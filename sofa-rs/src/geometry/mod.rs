//! Planar geometry used to describe sofa pieces, in centimeters.

pub mod primitives;

use serde::{Deserialize, Serialize};

/// Orientation of a seating branch or of a split line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}
