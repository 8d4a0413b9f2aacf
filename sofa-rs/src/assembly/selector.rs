use log::debug;

use crate::assembly::{Assembly, assemble};
use crate::entities::SofaSpec;
use crate::error::{Result, SofaError};
use crate::topology::{Anchors, Arrangement, build_anchors};

/// One arrangement of a sofa together with its anchors and pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub arrangement: Arrangement,
    pub anchors: Anchors,
    pub assembly: Assembly,
}

impl Candidate {
    pub fn build(spec: &SofaSpec, arrangement: Arrangement) -> Result<Self> {
        let anchors = build_anchors(spec, &arrangement)?;
        let assembly = assemble(&anchors)?;
        Ok(Candidate {
            arrangement,
            anchors,
            assembly,
        })
    }

    pub fn n_splits(&self) -> usize {
        self.assembly.n_banquettes() - self.arrangement.n_branches()
    }
}

/// Builds every candidate arrangement of `spec` and keeps the one with the fewest banquettes,
/// then the fewest splits. Remaining ties go to the earliest candidate.
///
/// Candidates that cannot be built are skipped, if none can, the first error is returned.
pub fn select_layout(spec: &SofaSpec) -> Result<Candidate> {
    let mut first_err: Option<SofaError> = None;
    let mut best: Option<Candidate> = None;

    for arrangement in Arrangement::candidates(spec) {
        match Candidate::build(spec, arrangement) {
            Ok(candidate) => {
                debug!(
                    "[SELECT] {}: {} banquettes, {} splits",
                    arrangement.label(),
                    candidate.assembly.n_banquettes(),
                    candidate.n_splits()
                );
                let better = match &best {
                    None => true,
                    Some(b) => {
                        (candidate.assembly.n_banquettes(), candidate.n_splits())
                            < (b.assembly.n_banquettes(), b.n_splits())
                    }
                };
                if better {
                    best = Some(candidate);
                }
            }
            Err(e) => {
                debug!("[SELECT] {} rejected: {e}", arrangement.label());
                first_err.get_or_insert(e);
            }
        }
    }

    match (best, first_err) {
        (Some(best), _) => Ok(best),
        (None, Some(e)) => Err(e),
        (None, None) => Err(SofaError::InternalInvariantViolation(format!(
            "no candidate arrangement for {:?}",
            spec.topology
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Side, Sides, Topology};

    #[test]
    fn u_one_corner_prefers_unsplit_layout() {
        //the right seat of v1 runs down to the frame corner (265 cm) and must be split
        let spec = SofaSpec::u_shaped(
            Topology::UOneCorner { variant: None },
            300.0,
            200.0,
            290.0,
            70.0,
        )
        .with_backrests(Sides::ALL)
        .with_armrests(Sides::of(&[Side::Left, Side::Right]));
        let candidate = select_layout(&spec).unwrap();
        assert_eq!(candidate.arrangement.variant, Some("v2"));
        assert_eq!(candidate.n_splits(), 0);
    }

    #[test]
    fn u_defaults_to_v2() {
        let spec = SofaSpec::u_shaped(Topology::U { variant: None }, 300.0, 200.0, 200.0, 70.0)
            .with_backrests(Sides::ALL);
        let candidate = select_layout(&spec).unwrap();
        assert_eq!(candidate.arrangement.variant, Some("v2"));
    }

    #[test]
    fn tall_l_starts_with_v2() {
        let spec = SofaSpec::l_shaped(Topology::L { variant: None }, 200.0, 300.0, 70.0)
            .with_backrests(Sides::of(&[Side::Left, Side::Bottom]));
        let candidate = select_layout(&spec).unwrap();
        assert_eq!(candidate.arrangement.variant, Some("v2"));
    }

    #[test]
    fn explicit_layout_error_is_returned() {
        let spec = SofaSpec::l_shaped(Topology::LCorner, 300.0, 95.0, 70.0)
            .with_backrests(Sides::of(&[Side::Left, Side::Bottom]));
        assert!(select_layout(&spec).unwrap_err().is_invalid_configuration());
    }
}
