use log::debug;

use crate::error::{ConfigError, Result};
use crate::geometry::Axis;
use crate::geometry::primitives::Rect;
use crate::util::MAX_BANQUETTE_LENGTH;
use crate::util::assertions;

/// Integer midpoint between two anchors, measured from `lo` toward `hi`
/// (so the result does not depend on which of the two is numerically larger).
pub fn split_mid(lo: f64, hi: f64) -> f64 {
    let delta = hi - lo;
    let half = (delta.abs() / 2.0).floor();
    match delta >= 0.0 {
        true => lo + half,
        false => lo - half,
    }
}

/// Result of splitting one banquette.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// The resulting pieces, ordered along their split axis
    pub parts: Vec<Rect>,
    /// Every cut made, as `(axis, coordinate)`
    pub cuts: Vec<(Axis, f64)>,
}

impl Split {
    pub fn is_split(&self) -> bool {
        !self.cuts.is_empty()
    }

    /// Cut coordinates along `axis`, ascending.
    pub fn cuts_along(&self, axis: Axis) -> Vec<f64> {
        let mut cuts = self
            .cuts
            .iter()
            .filter(|(a, _)| *a == axis)
            .map(|(_, c)| *c)
            .collect::<Vec<_>>();
        cuts.sort_by(f64::total_cmp);
        cuts
    }
}

/// Bisects `seat` once along its long side if it exceeds [`MAX_BANQUETTE_LENGTH`], then
/// re-checks every part. A part still above the cap is an `OversizedBanquette` error.
pub fn split_banquette(seat: Rect) -> Result<Split> {
    let split = match seat.nominal_dims().0 > MAX_BANQUETTE_LENGTH {
        false => Split {
            parts: vec![seat],
            cuts: vec![],
        },
        true => {
            let axis = seat.long_axis();
            let span = seat.span(axis);
            let mid = split_mid(span.lo, span.hi);
            let (low, high) = seat.cut(axis, mid)?;
            Split {
                parts: vec![low, high],
                cuts: vec![(axis, mid)],
            }
        }
    };

    if let Some(oversized) = split
        .parts
        .iter()
        .map(|p| p.nominal_dims().0)
        .find(|l| *l > MAX_BANQUETTE_LENGTH)
    {
        return Err(ConfigError::OversizedBanquette {
            length: oversized,
            max: MAX_BANQUETTE_LENGTH,
        }
        .into());
    }
    debug_assert!(assertions::split_covers_original(&seat, &split.parts));

    if split.is_split() {
        debug!(
            "[SPLIT] banquette {:?} cut in two at {:?}",
            seat.nominal_dims(),
            split.cuts
        );
    }
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 600.0, 300.0; "even")]
    #[test_case(10.0, 401.0, 205.0; "odd span floors")]
    #[test_case(401.0, 10.0, 206.0; "reversed anchors")]
    #[test_case(0.0, 250.5, 125.0; "fractional span")]
    fn midpoint(lo: f64, hi: f64, expected: f64) {
        assert_eq!(split_mid(lo, hi), expected);
    }

    #[test]
    fn short_banquette_untouched() {
        let seat = Rect::try_new(15.0, 10.0, 265.0, 80.0).unwrap();
        let split = split_banquette(seat).unwrap();
        assert!(!split.is_split());
        assert_eq!(split.parts, vec![seat]);
    }

    #[test]
    fn long_banquette_bisected_once() {
        let seat = Rect::try_new(80.0, 10.0, 580.0, 80.0).unwrap();
        let split = split_banquette(seat).unwrap();
        assert_eq!(split.parts.len(), 2);
        assert_eq!(split.cuts, vec![(Axis::Horizontal, 330.0)]);
        assert_eq!(split.parts[0].x_max, split.parts[1].x_min);
    }

    #[test]
    fn still_oversized_after_one_split() {
        let seat = Rect::try_new(10.0, 0.0, 80.0, 610.0).unwrap();
        assert_eq!(
            split_banquette(seat),
            Err(ConfigError::OversizedBanquette {
                length: 305,
                max: MAX_BANQUETTE_LENGTH,
            }
            .into())
        );
    }
}
