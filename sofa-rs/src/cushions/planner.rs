use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;

use crate::cushions::{CushionPolicy, SizeClass};
use crate::error::{ConfigError, Result};
use crate::util::{ANCHOR_WINDOW, MAX_CUSHION_SPREAD};

/// Cushion sizes chosen for a set of branch lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeChoice {
    /// One size per input length, in the same order
    pub sizes: Vec<u32>,
    /// Sum of `length % size` over all branches
    pub waste: u32,
}

/// Chooses a cushion size for every branch of nominal length `lengths[i]`.
///
/// Uniform policies pick the single size minimizing total waste (ties go to the larger size).
/// Other policies sweep every anchor size `a` of the interval, let each branch pick its own best
/// size within `[a - 2, a + 2]` and keep the best vector according to the size class. Branches
/// of zero length take no part in the choice and receive the largest chosen size.
pub fn choose_sizes(lengths: &[u32], policy: &CushionPolicy) -> Result<SizeChoice> {
    policy.validate()?;
    let (lo, hi) = policy.interval();
    if lo > hi {
        return Err(ConfigError::InfeasibleCushionPolicy { lo, hi }.into());
    }
    let active = lengths.iter().copied().filter(|l| *l > 0).collect_vec();

    let active_sizes = match policy {
        CushionPolicy::Valise { class, same: false } if !active.is_empty() => {
            anchor_sweep(&active, lo, hi, *class)
        }
        _ => {
            let size = best_uniform(&active, &policy.candidate_sizes());
            vec![size; active.len()]
        }
    };

    let largest = active_sizes.iter().copied().max().unwrap_or(hi);
    let mut chosen = active_sizes.into_iter();
    let sizes = lengths
        .iter()
        .map(|l| match *l > 0 {
            true => chosen.next().unwrap_or(largest),
            false => largest,
        })
        .collect_vec();
    let waste = total_waste(lengths, &sizes);

    debug!("[PLAN] lengths {lengths:?} with policy {policy}: sizes {sizes:?}, waste {waste}");

    Ok(SizeChoice { sizes, waste })
}

fn total_waste(lengths: &[u32], sizes: &[u32]) -> u32 {
    lengths.iter().zip(sizes).map(|(l, s)| l % s).sum()
}

/// Single size minimizing total waste, larger size on ties.
fn best_uniform(lengths: &[u32], candidates: &[u32]) -> u32 {
    candidates
        .iter()
        .copied()
        .min_by_key(|s| (lengths.iter().map(|l| l % s).sum::<u32>(), Reverse(*s)))
        .unwrap_or(crate::util::AUTO_CUSHION_SIZES[1])
}

/// Every size of a vector lies within the window of its anchor, so the spread never
/// exceeds `2 * ANCHOR_WINDOW`, which is below [`MAX_CUSHION_SPREAD`].
fn anchor_sweep(lengths: &[u32], lo: u32, hi: u32, class: SizeClass) -> Vec<u32> {
    (lo..=hi)
        .map(|anchor| {
            let w_lo = u32::max(lo, anchor.saturating_sub(ANCHOR_WINDOW));
            let w_hi = u32::min(hi, anchor + ANCHOR_WINDOW);
            let sizes = lengths
                .iter()
                .map(|l| {
                    (w_lo..=w_hi)
                        .min_by_key(|s| (l % s, Reverse(*s)))
                        .unwrap_or(anchor)
                })
                .collect_vec();
            (SweepScore::new(lengths, &sizes, class), sizes)
        })
        .min_by_key(|(score, _)| score.key())
        .map(|(score, sizes)| {
            debug_assert!(score.spread <= MAX_CUSHION_SPREAD);
            sizes
        })
        .unwrap_or_default()
}

/// Comparison of size vectors produced by the anchor sweep.
#[derive(Debug, Clone, Copy)]
struct SweepScore {
    waste: u32,
    count: u32,
    spread: u32,
    median: u32,
    uniform: bool,
    class: SizeClass,
}

impl SweepScore {
    fn new(lengths: &[u32], sizes: &[u32], class: SizeClass) -> Self {
        let sorted = sizes.iter().copied().sorted().collect_vec();
        let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
        SweepScore {
            waste: total_waste(lengths, sizes),
            count: lengths.iter().zip(sizes).map(|(l, s)| l / s).sum(),
            spread: max - min,
            median: sorted[sorted.len() / 2],
            uniform: min == max,
            class,
        }
    }

    /// Lower is better. Small cushions favor more cushions, large cushions fewer,
    /// free choice goes straight to spread and median.
    fn key(&self) -> (u32, i64, u32, Reverse<u32>, bool) {
        let count = match self.class {
            SizeClass::Small => -(self.count as i64),
            SizeClass::Large => self.count as i64,
            SizeClass::Free => 0,
        };
        (
            self.waste,
            count,
            self.spread,
            Reverse(self.median),
            !self.uniform,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn valise(class: SizeClass, same: bool) -> CushionPolicy {
        CushionPolicy::Valise { class, same }
    }

    #[test_case(&[250], 80; "straight 250")]
    #[test_case(&[270], 90; "exact fit")]
    #[test_case(&[195, 130], 65; "two branches")]
    #[test_case(&[0], 90; "empty branch")]
    fn auto_picks_least_waste(lengths: &[u32], expected: u32) {
        let choice = choose_sizes(lengths, &CushionPolicy::Auto).unwrap();
        assert!(choice.sizes.iter().all(|s| *s == expected));
    }

    #[test]
    fn fixed_is_applied_everywhere() {
        let choice = choose_sizes(&[300, 0, 210], &CushionPolicy::Fixed(70)).unwrap();
        assert_eq!(choice.sizes, vec![70, 70, 70]);
        assert_eq!(choice.waste, 300 % 70);
    }

    #[test]
    fn same_size_is_uniform() {
        let choice = choose_sizes(&[310, 207, 188], &valise(SizeClass::Free, true)).unwrap();
        assert!(choice.sizes.iter().all_equal());
    }

    #[test]
    fn valise_fits_each_branch() {
        //240 = 3 x 80, 246 = 3 x 82
        let choice = choose_sizes(&[240, 246], &valise(SizeClass::Large, false)).unwrap();
        assert_eq!(choice.waste, 0);
        assert!(choice.sizes.iter().minmax().into_option().is_some_and(|(a, b)| b - a <= 5));
    }

    #[test]
    fn small_class_prefers_more_cushions() {
        //both 60 and 72 divide 360 and 720 exactly, class p prefers the 60 cm cushions
        let choice = choose_sizes(&[360, 720], &valise(SizeClass::Small, false)).unwrap();
        assert_eq!(choice.sizes, vec![60, 60]);
    }

    #[test]
    fn large_class_prefers_fewer_cushions() {
        let choice = choose_sizes(&[400, 800], &valise(SizeClass::Large, false)).unwrap();
        assert_eq!(choice.sizes, vec![100, 100]);
    }

    #[test]
    fn zero_length_branch_gets_largest_size() {
        let choice = choose_sizes(&[0, 246, 240], &valise(SizeClass::Large, false)).unwrap();
        assert_eq!(choice.sizes[0], *choice.sizes[1..].iter().max().unwrap());
    }

    #[test_case(55; "below the range")]
    #[test_case(0; "zero")]
    #[test_case(101; "above the range")]
    fn fixed_size_outside_range_is_rejected(size: u32) {
        assert_eq!(
            choose_sizes(&[250], &CushionPolicy::Fixed(size)),
            Err(ConfigError::CushionSizeOutOfRange {
                size,
                lo: 60,
                hi: 100
            }
            .into())
        );
    }
}
