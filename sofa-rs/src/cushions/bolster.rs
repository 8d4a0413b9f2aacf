use log::{debug, warn};
use serde::Serialize;

use crate::entities::{End, Side, SofaSpec};
use crate::error::{ConfigError, Result};
use crate::geometry::primitives::{Rect, Span};
use crate::topology::Anchors;
use crate::util::BOLSTER_THICKNESS;

/// A bolster ("traversin") reserved at a free branch end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bolster {
    /// Requested side
    pub side: Side,
    /// Branch holding the bolster
    pub branch: Side,
    pub rect: Rect,
}

/// Places the requested bolsters at the end of their branch's cushion run.
/// Returns them together with the remaining runs, one per branch of `anchors`.
/// A bolster that does not fit in what is left of its run is skipped and the run is emptied.
pub fn place_bolsters(spec: &SofaSpec, anchors: &Anchors) -> Result<(Vec<Bolster>, Vec<Span>)> {
    let mut runs = anchors.branches.iter().map(|b| b.run).collect::<Vec<_>>();
    let mut bolsters = vec![];
    let thickness = BOLSTER_THICKNESS as f64;

    for side in spec.bolsters.iter() {
        let Some((idx, end)) = anchors
            .branches
            .iter()
            .enumerate()
            .find_map(|(i, b)| b.free_end(side).map(|e| (i, e)))
        else {
            return Err(ConfigError::SideNotAvailable {
                feature: "bolster",
                side,
                topology: anchors.arrangement.kind,
            }
            .into());
        };
        let branch = &anchors.branches[idx];
        let run = runs[idx];
        if run.length() < thickness {
            warn!(
                "[BOLSTER] no room for a {side} bolster on the {} branch ({:.1} cm left), skipped",
                branch.side,
                run.length()
            );
            runs[idx] = match end {
                End::High => Span::new(run.lo, run.lo),
                End::Low => Span::new(run.hi, run.hi),
            };
            continue;
        }
        let (along, rest) = match end {
            End::High => (Span::new(run.hi - thickness, run.hi), run.shrink_hi(thickness)),
            End::Low => (Span::new(run.lo, run.lo + thickness), run.shrink_lo(thickness)),
        };
        let rect = Rect::from_spans(branch.axis, along, branch.bolster_strip)?;
        debug!("[BOLSTER] {side} bolster at {rect:?}");

        runs[idx] = rest;
        bolsters.push(Bolster {
            side,
            branch: branch.side,
            rect,
        });
    }
    Ok((bolsters, runs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Sides, Topology};
    use crate::topology::{Arrangement, build_anchors};

    #[test]
    fn straight_bolsters_centered_at_both_ends() {
        let spec = SofaSpec::straight(280.0, 90.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_armrests(Sides::of(&[Side::Left, Side::Right]))
            .with_bolsters(Sides::of(&[Side::Left, Side::Right]));
        let anchors = build_anchors(&spec, &Arrangement::straight()).unwrap();
        let (bolsters, runs) = place_bolsters(&spec, &anchors).unwrap();
        assert_eq!(runs, vec![Span::new(45.0, 235.0)]);
        assert_eq!(bolsters[0].rect, Rect::try_new(15.0, 20.0, 45.0, 90.0).unwrap());
        assert_eq!(bolsters[1].rect, Rect::try_new(235.0, 20.0, 265.0, 90.0).unwrap());
    }

    #[test]
    fn l_bolster_after_chaise() {
        let spec = SofaSpec::l_shaped(Topology::LCorner, 300.0, 250.0, 70.0)
            .with_backrests(Sides::of(&[Side::Left, Side::Bottom]))
            .with_chaise(Side::Bottom, 100.0)
            .with_bolsters(Sides::of(&[Side::Bottom]));
        let anchors = build_anchors(&spec, &Arrangement::l_corner()).unwrap();
        let (bolsters, runs) = place_bolsters(&spec, &anchors).unwrap();
        assert_eq!(bolsters.len(), 1);
        assert_eq!(bolsters[0].branch, Side::Bottom);
        assert_eq!(bolsters[0].rect, Rect::try_new(170.0, 10.0, 200.0, 80.0).unwrap());
        assert_eq!(runs[1], Span::new(10.0, 170.0));
    }

    #[test]
    fn bolster_skipped_on_run_taken_by_chaise() {
        let spec = SofaSpec::straight(250.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_chaise(Side::Left, 250.0)
            .with_bolsters(Sides::of(&[Side::Left]));
        let anchors = build_anchors(&spec, &Arrangement::straight()).unwrap();
        let (bolsters, runs) = place_bolsters(&spec, &anchors).unwrap();
        assert!(bolsters.is_empty());
        assert!(runs[0].is_empty());
    }

    #[test]
    fn bolster_skipped_when_less_than_its_thickness_is_left() {
        let spec = SofaSpec::straight(250.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_chaise(Side::Left, 230.0)
            .with_bolsters(Sides::of(&[Side::Right]));
        let anchors = build_anchors(&spec, &Arrangement::straight()).unwrap();
        let (bolsters, runs) = place_bolsters(&spec, &anchors).unwrap();
        assert!(bolsters.is_empty());
        assert_eq!(runs[0].length(), 0.0);
    }
}
