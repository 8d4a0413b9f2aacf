use std::cmp::Reverse;

use itertools::iproduct;
use log::debug;

use crate::entities::{Side, TopologyKind};
use crate::topology::Arrangement;
use crate::util::CUSHION_DEPTH;

/// Which branch gives way at each junction.
/// `true` means the bottom branch yields and the side branch starts at the frame corner.
/// A straight sofa has no junction; there `left` insets the start of its run instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shifts {
    pub left: bool,
    pub right: bool,
}

/// Length removed from the start and end of a branch's cushion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub start: u32,
    pub end: u32,
}

impl Shifts {
    /// Insets of the branch on `side` under these shifts.
    pub fn insets(&self, arrangement: &Arrangement, side: Side) -> Insets {
        let yields = |y: bool| if y { CUSHION_DEPTH } else { 0 };
        let has_left = offsets_start(arrangement);
        let has_right = arrangement.right.is_some();
        match side {
            Side::Left => Insets {
                start: yields(!self.left),
                end: 0,
            },
            Side::Right => Insets {
                start: yields(!self.right),
                end: 0,
            },
            Side::Bottom => Insets {
                start: yields(has_left && self.left),
                end: yields(has_right && self.right),
            },
        }
    }
}

/// Enumerates the shift combinations of `arrangement` in a fixed order and returns the first one
/// maximizing the total cushion count, then minimizing the total waste.
///
/// `branches` holds, per branch, its side, nominal run length and cushion size.
pub fn choose_shifts(arrangement: &Arrangement, branches: &[(Side, u32, u32)]) -> Shifts {
    let options = |present: bool| match present {
        true => vec![false, true],
        false => vec![false],
    };
    let combos = iproduct!(
        options(arrangement.right.is_some()),
        options(offsets_start(arrangement))
    )
    .map(|(right, left)| Shifts { left, right });

    let mut best: Option<((Reverse<u32>, u32), Shifts)> = None;
    for shifts in combos {
        let (count, waste) = branches
            .iter()
            .map(|(side, length, size)| fill(*length, shifts.insets(arrangement, *side), *size))
            .fold((0, 0), |(c, w), (bc, bw)| (c + bc, w + bw));
        let key = (Reverse(count), waste);
        debug!("[SHIFT] {shifts:?}: {count} cushions, waste {waste}");
        if best.as_ref().is_none_or(|(b, _)| key < *b) {
            best = Some((key, shifts));
        }
    }
    best.map(|(_, s)| s).unwrap_or_default()
}

/// Whether the start of the bottom run may be inset: at a left junction, or freely on a
/// straight sofa.
fn offsets_start(arrangement: &Arrangement) -> bool {
    arrangement.left.is_some() || arrangement.kind == TopologyKind::Straight
}

/// Number of cushions of `size` fitting in `length` after `insets`, and the remaining length.
pub fn fill(length: u32, insets: Insets, size: u32) -> (u32, u32) {
    let usable = length.saturating_sub(insets.start + insets.end);
    match size {
        0 => (0, usable),
        _ => (usable / size, usable % size),
    }
}
