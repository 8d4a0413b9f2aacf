use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::Pieces;
use crate::geometry::primitives::Rect;
use crate::util::MAX_BANQUETTE_LENGTH;

//Checks on the state of a layout
//Used in debug_assert!() blocks

/// The parts tile `original` exactly: same envelope, same total area, no overlap.
pub fn split_covers_original(original: &Rect, parts: &[Rect]) -> bool {
    let Some(envelope) = parts.iter().copied().reduce(|a, b| a.union(&b)) else {
        return false;
    };
    if envelope != *original {
        error!("[ASSERT] split envelope {envelope:?} differs from {original:?}");
        return false;
    }
    let area: f64 = parts.iter().map(|r| r.area()).sum();
    if !approx_eq!(f64, area, original.area(), epsilon = 1e-6) {
        error!("[ASSERT] split area {area} differs from {}", original.area());
        return false;
    }
    rects_disjoint(parts)
}

pub fn rects_disjoint(rects: &[Rect]) -> bool {
    rects
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.overlaps(b))
}

pub fn banquettes_within_cap(pieces: &Pieces) -> bool {
    pieces
        .banquettes
        .iter()
        .all(|b| b.length <= MAX_BANQUETTE_LENGTH)
}

/// `count` cushions of `size` fit in `length` and leave no room for another one.
pub fn cushion_coverage_tight(length: u32, size: u32, count: u32) -> bool {
    let used = count * size;
    used <= length && length - used < size
}
