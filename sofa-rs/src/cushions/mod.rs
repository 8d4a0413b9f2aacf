//! Cushion Length Planner and Bolster Placer.
//!
//! Back cushions are laid along the backrest of every branch, starting from the frame corner.
//! Where two branches meet, one of them gives way by one cushion depth
//! ([`CUSHION_DEPTH`](crate::util::CUSHION_DEPTH)).

mod bolster;
mod planner;
mod policy;
mod shift;

pub use bolster::{Bolster, place_bolsters};
pub use planner::{SizeChoice, choose_sizes};
pub use policy::{CushionPolicy, SizeClass};
pub use shift::{Insets, Shifts, choose_shifts, fill};

use itertools::{Itertools, izip};
use serde::Serialize;

use crate::entities::{Side, SofaSpec};
use crate::error::Result;
use crate::geometry::primitives::{Rect, Span};
use crate::topology::Anchors;
use crate::util::assertions;

/// Cushions of one seating branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchCushions {
    pub side: Side,
    pub size: u32,
    pub count: u32,
    /// Length left uncovered at the end of the run
    pub waste: u32,
    /// Whether the run is inset by one cushion depth at a junction
    pub shifted: bool,
    /// Run length from the frame corner to the (chaise and bolster reduced) end
    pub nominal_length: u32,
    pub start_inset: u32,
    pub end_inset: u32,
    pub cushions: Vec<Rect>,
}

impl BranchCushions {
    /// Length actually available to cushions.
    pub fn usable_length(&self) -> u32 {
        self.nominal_length
            .saturating_sub(self.start_inset + self.end_inset)
    }
}

/// Cushion sizes, shifts and placements for every branch, plus the bolsters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CushionPlan {
    pub policy: CushionPolicy,
    pub branches: Vec<BranchCushions>,
    pub bolsters: Vec<Bolster>,
    /// The size shared by all branches, for uniform policies
    pub uniform_size: Option<u32>,
}

impl CushionPlan {
    pub fn total_count(&self) -> u32 {
        self.branches.iter().map(|b| b.count).sum()
    }

    pub fn total_waste(&self) -> u32 {
        self.branches.iter().map(|b| b.waste).sum()
    }

    /// Difference between the largest and smallest size among branches with a non-empty run.
    pub fn spread(&self) -> u32 {
        self.branches
            .iter()
            .filter(|b| b.nominal_length > 0)
            .map(|b| b.size)
            .minmax()
            .into_option()
            .map_or(0, |(min, max)| max - min)
    }

    pub fn branch(&self, side: Side) -> Option<&BranchCushions> {
        self.branches.iter().find(|b| b.side == side)
    }
}

/// Runs the Bolster Placer and the Cushion Length Planner on the branches of `anchors`.
pub fn plan_cushions(spec: &SofaSpec, anchors: &Anchors) -> Result<CushionPlan> {
    let (bolsters, runs) = place_bolsters(spec, anchors)?;
    let lengths = runs
        .iter()
        .map(|r| r.length().floor() as u32)
        .collect_vec();
    let choice = choose_sizes(&lengths, &spec.cushions)?;

    let shift_input = izip!(&anchors.branches, &lengths, &choice.sizes)
        .map(|(b, l, s)| (b.side, *l, *s))
        .collect_vec();
    let shifts = choose_shifts(&anchors.arrangement, &shift_input);

    let mut branches = vec![];
    for (branch, run, length, size) in izip!(&anchors.branches, &runs, &lengths, &choice.sizes) {
        let insets = shifts.insets(&anchors.arrangement, branch.side);
        let (count, waste) = fill(*length, insets, *size);
        debug_assert!(assertions::cushion_coverage_tight(
            length.saturating_sub(insets.start + insets.end),
            *size,
            count
        ));

        let start = run.lo + insets.start as f64;
        let cushions = (0..count)
            .map(|i| {
                let lo = start + (i * size) as f64;
                Rect::from_spans(branch.axis, Span::new(lo, lo + *size as f64), branch.cushion_strip)
            })
            .collect::<Result<Vec<_>>>()?;

        branches.push(BranchCushions {
            side: branch.side,
            size: *size,
            count,
            waste,
            shifted: insets != Insets::default(),
            nominal_length: *length,
            start_inset: insets.start,
            end_inset: insets.end,
            cushions,
        });
    }

    let uniform_size = match spec.cushions.is_uniform() {
        true => choice.sizes.first().copied(),
        false => None,
    };

    Ok(CushionPlan {
        policy: spec.cushions,
        branches,
        bolsters,
        uniform_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Sides, Topology};
    use crate::topology::{Arrangement, build_anchors};

    #[test]
    fn corner_cushions_do_not_overlap() {
        let spec = SofaSpec::l_shaped(Topology::LCorner, 300.0, 250.0, 70.0)
            .with_backrests(Sides::of(&[Side::Left, Side::Bottom]))
            .with_cushions(CushionPolicy::Fixed(80));
        let anchors = build_anchors(&spec, &Arrangement::l_corner()).unwrap();
        let plan = plan_cushions(&spec, &anchors).unwrap();

        let all = plan
            .branches
            .iter()
            .flat_map(|b| b.cushions.iter().copied())
            .collect_vec();
        assert!(assertions::rects_disjoint(&all));
        assert_eq!(plan.uniform_size, Some(80));
        //left run 240 and bottom run 290: only one of them can start at the corner
        assert_eq!(plan.branches.iter().filter(|b| b.shifted).count(), 1);
        assert_eq!(plan.total_count(), 6);
    }

    #[test]
    fn cushions_lie_on_the_backrest_strip() {
        let spec = SofaSpec::straight(280.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_armrests(Sides::ALL.with(Side::Bottom, false));
        let anchors = build_anchors(&spec, &Arrangement::straight()).unwrap();
        let plan = plan_cushions(&spec, &anchors).unwrap();
        let bottom = plan.branch(Side::Bottom).unwrap();
        assert_eq!(bottom.cushions[0], Rect::try_new(15.0, 10.0, 95.0, 25.0).unwrap());
        assert_eq!(bottom.cushions.len() as u32, bottom.count);
        assert_eq!(plan.spread(), 0);
    }
}
