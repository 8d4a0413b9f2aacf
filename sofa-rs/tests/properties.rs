use itertools::Itertools;
use proptest::prelude::*;

use sofa_rs::build_layout;
use sofa_rs::cushions::{CushionPolicy, SizeClass, choose_sizes};
use sofa_rs::entities::{Chaise, LVariant, Sides, SofaSpec, Topology, UVariant};
use sofa_rs::util::assertions;
use sofa_rs::util::{MAX_BANQUETTE_LENGTH, MAX_CUSHION_SIZE, MAX_CUSHION_SPREAD, MIN_CUSHION_SIZE};

fn topology() -> impl Strategy<Value = Topology> {
    let l_variant = prop::option::of(prop::sample::select(LVariant::ALL.to_vec()));
    let u_variant = || prop::option::of(prop::sample::select(UVariant::ALL.to_vec()));
    prop_oneof![
        Just(Topology::Straight),
        l_variant.prop_map(|variant| Topology::L { variant }),
        Just(Topology::LCorner),
        u_variant().prop_map(|variant| Topology::U { variant }),
        u_variant().prop_map(|variant| Topology::UOneCorner { variant }),
        Just(Topology::UTwoCorners),
    ]
}

fn policy() -> impl Strategy<Value = CushionPolicy> {
    let class = prop::sample::select(vec![SizeClass::Free, SizeClass::Small, SizeClass::Large]);
    prop_oneof![
        Just(CushionPolicy::Auto),
        (MIN_CUSHION_SIZE..=MAX_CUSHION_SIZE).prop_map(CushionPolicy::Fixed),
        (class, any::<bool>()).prop_map(|(class, same)| CushionPolicy::Valise { class, same }),
    ]
}

fn masked(flags: [bool; 3], allowed: Sides) -> Sides {
    Sides {
        left: flags[0] && allowed.left,
        bottom: flags[1] && allowed.bottom,
        right: flags[2] && allowed.right,
    }
}

prop_compose! {
    fn sofa_spec()(
        topology in topology(),
        width in 150u32..=600,
        left_height in 150u32..=600,
        right_height in 150u32..=600,
        depth in 50u32..=100,
        backrests in any::<[bool; 3]>(),
        armrests in any::<[bool; 3]>(),
        bolsters in any::<[bool; 3]>(),
        chaise in prop::option::of((0usize..2, 30u32..=400)),
        cushions in policy(),
    ) -> SofaSpec {
        let family = topology.kind().family();
        let mut backrests = masked(backrests, family.backrest_sides());
        let mut armrests = masked(armrests, family.end_sides());
        let ends = family.end_sides().iter().collect_vec();
        //a chaise replaces the armrest of its side and leans on a backrest where one can stand
        let chaise = chaise.map(|(idx, length)| {
            let side = ends[idx % ends.len()];
            armrests = armrests.with(side, false);
            if family.backrest_sides().get(side) {
                backrests = backrests.with(side, true);
            }
            Chaise { side, length: length as f64 }
        });
        SofaSpec {
            topology,
            width: width as f64,
            left_height: Some(left_height as f64),
            right_height: Some(right_height as f64),
            depth: depth as f64,
            backrests,
            armrests,
            chaise,
            bolsters: masked(bolsters, family.end_sides()),
            cushions,
        }
    }
}

proptest! {
    #[test]
    fn banquettes_are_capped_and_tile_their_seat(spec in sofa_spec()) {
        match build_layout(&spec) {
            Ok(layout) => {
                prop_assert!(layout.pieces.banquettes.iter().all(|b| b.length <= MAX_BANQUETTE_LENGTH));
                for branch in &layout.anchors.branches {
                    let parts = layout.pieces.banquettes_of(branch.side).map(|p| p.bbox()).collect_vec();
                    prop_assert!(assertions::split_covers_original(&branch.seat, &parts));
                    prop_assert_eq!(layout.split_flags.get(branch.side), parts.len() > 1);
                }
            }
            Err(e) => prop_assert!(e.is_invalid_configuration(), "{}", e),
        }
    }

    #[test]
    fn no_room_for_one_more_cushion(spec in sofa_spec()) {
        if let Ok(layout) = build_layout(&spec) {
            for b in &layout.cushions.branches {
                let usable = b.usable_length();
                prop_assert!(b.count * b.size <= usable);
                prop_assert!(usable - b.count * b.size < b.size);
                prop_assert_eq!(b.cushions.len() as u32, b.count);
            }
            let cushions = layout.cushions.branches.iter().flat_map(|b| b.cushions.iter().copied()).collect_vec();
            prop_assert!(assertions::rects_disjoint(&cushions));
        }
    }

    #[test]
    fn everything_within_footprint(spec in sofa_spec()) {
        if let Ok(layout) = build_layout(&spec) {
            let footprint = layout.anchors.footprint;
            prop_assert!(layout.pieces.iter().all(|p| footprint.contains_rect(&p.bbox())));
            prop_assert!(layout.cushions.branches.iter().flat_map(|b| b.cushions.iter()).all(|c| footprint.contains_rect(c)));
            prop_assert!(layout.cushions.bolsters.iter().all(|b| footprint.contains_rect(&b.rect)));
        }
    }

    #[test]
    fn sizes_follow_policy(spec in sofa_spec()) {
        if let Ok(layout) = build_layout(&spec) {
            let plan = &layout.cushions;
            let (lo, hi) = spec.cushions.interval();
            prop_assert!(plan.branches.iter().all(|b| (lo..=hi).contains(&b.size)));
            let active = plan.branches.iter().filter(|b| b.nominal_length > 0).map(|b| b.size).collect_vec();
            match spec.cushions.is_uniform() {
                true => prop_assert!(active.iter().all_equal()),
                false => prop_assert!(plan.spread() <= MAX_CUSHION_SPREAD),
            }
        }
    }

    #[test]
    fn chaise_and_bolsters_only_shorten_runs(spec in sofa_spec()) {
        let bare = SofaSpec { chaise: None, bolsters: Sides::NONE, ..spec.clone() };
        if let (Ok(layout), Ok(bare)) = (build_layout(&spec), build_layout(&bare)) {
            prop_assume!(layout.arrangement == bare.arrangement);
            prop_assert!(layout.cushions.bolsters.len() <= spec.bolsters.iter().count());
            for (b, full) in layout.cushions.branches.iter().zip(&bare.cushions.branches) {
                prop_assert_eq!(b.side, full.side);
                prop_assert!(b.nominal_length <= full.nominal_length);
            }
        }
    }

    #[test]
    fn layout_is_deterministic(spec in sofa_spec()) {
        prop_assert_eq!(build_layout(&spec), build_layout(&spec));
    }

    #[test]
    fn planner_respects_interval_and_spread(
        lengths in prop::collection::vec(0u32..=600, 1..=3),
        class in prop::sample::select(vec![SizeClass::Free, SizeClass::Small, SizeClass::Large]),
    ) {
        let policy = CushionPolicy::Valise { class, same: false };
        let choice = choose_sizes(&lengths, &policy).unwrap();
        let (lo, hi) = class.interval();
        prop_assert_eq!(choice.sizes.len(), lengths.len());
        prop_assert!(choice.sizes.iter().all(|s| (lo..=hi).contains(s)));
        let active = lengths.iter().zip(&choice.sizes).filter(|(l, _)| **l > 0).map(|(_, s)| *s).collect_vec();
        if let Some((min, max)) = active.iter().minmax().into_option() {
            prop_assert!(max - min <= MAX_CUSHION_SPREAD);
        }
    }
}
