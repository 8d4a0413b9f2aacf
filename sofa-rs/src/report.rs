use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;

use crate::assembly::Assembly;
use crate::cushions::CushionPlan;
use crate::entities::{Side, SplitFlags, TopologyKind};
use crate::topology::Anchors;

/// Nominal dimensions of one banquette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BanquetteDims {
    pub side: Side,
    pub length: u32,
    pub width: u32,
}

/// Cushions of one branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchSummary {
    pub side: Side,
    pub size: u32,
    pub count: u32,
    pub waste: u32,
    pub shifted: bool,
}

/// Everything the pricing and document collaborators need, read from an assembled layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub topology: TopologyKind,
    pub layout: String,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub banquettes: Vec<BanquetteDims>,
    pub n_backrests: usize,
    pub n_armrests: usize,
    pub n_corner_blocks: usize,
    pub n_bolsters: usize,
    /// Side of the corner blocks, when there are any
    pub corner_side: Option<u32>,
    pub split_flags: SplitFlags,
    pub cushions: Vec<BranchSummary>,
    pub total_cushions: u32,
    pub cushion_policy: String,
    pub spread: u32,
}

impl Summary {
    pub fn new(anchors: &Anchors, assembly: &Assembly, plan: &CushionPlan, depth: f64) -> Self {
        let pieces = &assembly.pieces;
        let (width, height) = (anchors.footprint.width(), anchors.footprint.height());
        Summary {
            topology: anchors.arrangement.kind,
            layout: anchors.arrangement.label(),
            width: width.round() as u32,
            height: height.round() as u32,
            depth: depth.round() as u32,
            banquettes: pieces
                .banquettes
                .iter()
                .map(|p| BanquetteDims {
                    side: p.side,
                    length: p.length,
                    width: p.width,
                })
                .collect(),
            n_backrests: pieces.backrests.len(),
            n_armrests: pieces.armrests.len(),
            n_corner_blocks: pieces.corner_blocks.len(),
            n_bolsters: plan.bolsters.len(),
            corner_side: match pieces.corner_blocks.is_empty() {
                true => None,
                false => Some(anchors.corner_side.round() as u32),
            },
            split_flags: assembly.split_flags,
            cushions: plan
                .branches
                .iter()
                .map(|b| BranchSummary {
                    side: b.side,
                    size: b.size,
                    count: b.count,
                    waste: b.waste,
                    shifted: b.shifted,
                })
                .collect(),
            total_cushions: plan.total_count(),
            cushion_policy: plan.policy.to_string(),
            spread: plan.spread(),
        }
    }

    pub fn n_banquettes(&self) -> usize {
        self.banquettes.len()
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        writeln!(
            f,
            "Sofa: {}, {} x {} cm, depth {} cm",
            self.layout, self.width, self.height, self.depth
        )?;
        writeln!(
            f,
            "Banquettes ({}): {}",
            self.n_banquettes(),
            self.banquettes
                .iter()
                .map(|b| format!("{} {}x{}", b.side, b.length, b.width))
                .join(", ")
        )?;
        write!(
            f,
            "Backrests: {}, armrests: {}, corner blocks: {}",
            self.n_backrests, self.n_armrests, self.n_corner_blocks
        )?;
        if let Some(side) = self.corner_side {
            write!(f, " ({side} cm)")?;
        }
        writeln!(f, ", bolsters: {}", self.n_bolsters)?;
        writeln!(
            f,
            "Split: left {}, bottom {}, right {}",
            yes_no(self.split_flags.left),
            yes_no(self.split_flags.bottom),
            yes_no(self.split_flags.right)
        )?;
        write!(
            f,
            "Cushions ({}): {}, total {}, spread {} cm",
            self.cushion_policy,
            self.cushions
                .iter()
                .map(|c| format!("{} {} x {} cm", c.side, c.count, c.size))
                .join(", "),
            self.total_cushions,
            self.spread
        )
    }
}
