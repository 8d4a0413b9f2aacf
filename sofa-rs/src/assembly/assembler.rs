use itertools::Itertools;
use log::debug;

use crate::assembly::splitter::{Split, split_banquette};
use crate::entities::{Branch, Piece, PieceKind, Pieces, SplitFlags};
use crate::error::Result;
use crate::geometry::primitives::Rect;
use crate::topology::Anchors;
use crate::util::assertions;

/// Structural pieces of one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub pieces: Pieces,
    pub split_flags: SplitFlags,
}

impl Assembly {
    pub fn n_banquettes(&self) -> usize {
        self.pieces.banquettes.len()
    }
}

/// Turns the anchors into closed polygons for every structural piece.
pub fn assemble(anchors: &Anchors) -> Result<Assembly> {
    let mut pieces = Pieces::default();
    let mut split_flags = SplitFlags::default();

    for branch in &anchors.branches {
        let split = split_banquette(branch.seat)?;
        split_flags.set(branch.side, split.is_split());
        for part in &split.parts {
            pieces.push(Piece::from_rect(PieceKind::Banquette, branch.side, *part));
        }
        for segment in backrest_segments(branch, &split)? {
            pieces.push(Piece::from_rect(PieceKind::Backrest, branch.side, segment));
        }
        for armrest in &branch.armrests {
            pieces.push(Piece::from_rect(PieceKind::Armrest, branch.side, *armrest));
        }
    }
    for junction in &anchors.junctions {
        if let Some(block) = &junction.block {
            pieces.push(Piece::new(PieceKind::CornerBlock, junction.side, block.clone()));
        }
    }
    debug_assert!(assertions::banquettes_within_cap(&pieces));

    debug!(
        "[ASSEMBLY] {}: {} banquettes, {} backrests, {} armrests, {} corner blocks, split {:?}",
        anchors.arrangement.label(),
        pieces.banquettes.len(),
        pieces.backrests.len(),
        pieces.armrests.len(),
        pieces.corner_blocks.len(),
        split_flags
    );

    Ok(Assembly {
        pieces,
        split_flags,
    })
}

/// Cuts the backrest of `branch` at the junction boundary and at every banquette split
/// that falls strictly inside it.
fn backrest_segments(branch: &Branch, split: &Split) -> Result<Vec<Rect>> {
    let Some(backrest) = branch.backrest else {
        return Ok(vec![]);
    };
    let span = backrest.span(branch.axis);
    let cuts = branch
        .backrest_cuts
        .iter()
        .copied()
        .chain(split.cuts_along(branch.axis))
        .filter(|c| span.contains_strictly(*c))
        .sorted_by(f64::total_cmp)
        .dedup()
        .collect_vec();

    let mut segments = vec![];
    let mut rest = backrest;
    for cut in cuts {
        let (low, high) = rest.cut(branch.axis, cut)?;
        segments.push(low);
        rest = high;
    }
    segments.push(rest);
    Ok(segments)
}
