#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use test_case::test_case;

    use sofa_rs::cushions::{CushionPolicy, SizeClass};
    use sofa_rs::entities::{LVariant, Side, Sides, SofaSpec, Topology, UVariant};
    use sofa_rs::{BanquetteDims, ConfigError, SofaError, build_layout};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    #[test]
    fn straight_with_armrests_auto_cushions() {
        init_logger();
        let spec = SofaSpec::straight(280.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_armrests(Sides::of(&[Side::Left, Side::Right]));
        let layout = build_layout(&spec).unwrap();

        //the seat spans 280 - 2 x 15 between the armrests
        assert_eq!(
            layout.summary.banquettes,
            vec![BanquetteDims {
                side: Side::Bottom,
                length: 250,
                width: 70
            }]
        );
        assert_eq!(layout.summary.n_armrests, 2);
        assert_eq!(layout.summary.n_backrests, 1);
        let bottom = layout.cushions.branch(Side::Bottom).unwrap();
        assert_eq!((bottom.size, bottom.count, bottom.waste), (80, 3, 10));
        assert_eq!(layout.cushions.uniform_size, Some(80));
        assert!(!bottom.shifted);
    }

    #[test_case(350.0, 250.0, 3; "bottom through branch needs a split")]
    #[test_case(300.0, 250.0, 2; "no split")]
    fn l_with_small_cushions(width: f64, height: f64, n_banquettes: usize) {
        init_logger();
        let spec = SofaSpec::l_shaped(Topology::L { variant: None }, width, height, 70.0)
            .with_backrests(Sides::of(&[Side::Left, Side::Bottom]))
            .with_cushions(CushionPolicy::Valise {
                class: SizeClass::Small,
                same: false,
            });
        let layout = build_layout(&spec).unwrap();

        assert_eq!(layout.summary.n_banquettes(), n_banquettes);
        assert!(layout.pieces.banquettes.iter().all(|b| b.length <= 250));
        let sizes = layout.cushions.branches.iter().map(|b| b.size).collect_vec();
        assert!(sizes.iter().all(|s| (60..=74).contains(s)));
        assert!(layout.cushions.spread() <= 5);
    }

    #[test]
    fn wide_u_splits_bottom_at_midpoint() {
        init_logger();
        let spec = SofaSpec::u_shaped(Topology::U { variant: None }, 600.0, 200.0, 200.0, 70.0)
            .with_backrests(Sides::ALL)
            .with_armrests(Sides::of(&[Side::Left, Side::Right]));
        let layout = build_layout(&spec).unwrap();

        assert_eq!(layout.arrangement.variant, Some(UVariant::V2.name()));
        assert_eq!(layout.summary.n_banquettes(), 4);
        assert!(layout.split_flags.bottom);
        assert!(!layout.split_flags.left && !layout.split_flags.right);

        //bottom seat [80, 520] halved at 300
        let halves = layout
            .pieces
            .banquettes_of(Side::Bottom)
            .map(|p| (p.bbox().x_min, p.bbox().x_max))
            .collect_vec();
        assert_eq!(halves, vec![(80.0, 300.0), (300.0, 520.0)]);

        //junction segments at both ends, plus one bench segment per banquette
        let bottom_backrests = layout
            .pieces
            .backrests
            .iter()
            .filter(|p| p.side == Side::Bottom)
            .count();
        assert_eq!(bottom_backrests, 4);
    }

    #[test]
    fn banquette_too_long_for_a_single_split() {
        let spec = SofaSpec::straight(700.0, 70.0).with_backrests(Sides::of(&[Side::Bottom]));
        assert_eq!(
            build_layout(&spec),
            Err(SofaError::InvalidConfiguration(
                ConfigError::OversizedBanquette {
                    length: 350,
                    max: 250
                }
            ))
        );
    }

    #[test]
    fn straight_run_inset_from_armrest_when_it_saves_waste() {
        let spec = SofaSpec::straight(300.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_armrests(Sides::of(&[Side::Left, Side::Right]))
            .with_cushions(CushionPolicy::Fixed(80));
        let layout = build_layout(&spec).unwrap();
        let bottom = layout.cushions.branch(Side::Bottom).unwrap();
        //270 cm of run: 3 cushions either way, 15 cm of waste instead of 30
        assert_eq!((bottom.count, bottom.waste), (3, 15));
        assert!(bottom.shifted);
        assert_eq!(bottom.start_inset, 15);
        assert_eq!(bottom.cushions[0].x_min, 30.0);
    }

    #[test]
    fn chaise_next_to_armrest_is_rejected() {
        let spec = SofaSpec::straight(280.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_armrests(Sides::of(&[Side::Left]))
            .with_chaise(Side::Left, 100.0);
        assert_eq!(
            build_layout(&spec),
            Err(SofaError::InvalidConfiguration(
                ConfigError::ChaiseArmrestConflict { side: Side::Left }
            ))
        );
    }

    #[test]
    fn fixed_size_out_of_range_is_rejected() {
        let spec = SofaSpec::straight(280.0, 70.0).with_cushions(CushionPolicy::Fixed(55));
        assert_eq!(
            build_layout(&spec),
            Err(SofaError::InvalidConfiguration(
                ConfigError::CushionSizeOutOfRange {
                    size: 55,
                    lo: 60,
                    hi: 100
                }
            ))
        );
    }

    #[test_case(Topology::Straight, 0; "straight")]
    #[test_case(Topology::L { variant: Some(LVariant::V2) }, 0; "l v2")]
    #[test_case(Topology::LCorner, 1; "l corner")]
    #[test_case(Topology::U { variant: Some(UVariant::V3) }, 0; "u v3")]
    #[test_case(Topology::UOneCorner { variant: Some(UVariant::V4) }, 1; "u one corner v4")]
    #[test_case(Topology::UTwoCorners, 2; "u two corners")]
    fn corner_blocks_per_topology(topology: Topology, n_corners: usize) {
        let spec = SofaSpec::u_shaped(topology, 320.0, 220.0, 240.0, 70.0)
            .with_backrests(topology.kind().family().backrest_sides());
        let layout = build_layout(&spec).unwrap();
        assert_eq!(layout.summary.n_corner_blocks, n_corners);
        assert_eq!(layout.arrangement.n_corners(), n_corners);
        if n_corners > 0 {
            assert_eq!(layout.summary.corner_side, Some(90));
        }
    }

    #[test]
    fn bolsters_shorten_cushion_runs() {
        let base = SofaSpec::u_shaped(Topology::UTwoCorners, 400.0, 250.0, 250.0, 70.0)
            .with_backrests(Sides::ALL)
            .with_cushions(CushionPolicy::Fixed(60));
        let without = build_layout(&base).unwrap();
        let with = build_layout(&base.clone().with_bolsters(Sides::of(&[Side::Left, Side::Right])))
            .unwrap();

        assert_eq!(with.summary.n_bolsters, 2);
        for side in [Side::Left, Side::Right] {
            let a = without.cushions.branch(side).unwrap();
            let b = with.cushions.branch(side).unwrap();
            assert_eq!(a.nominal_length - b.nominal_length, 30);
        }
    }

    #[test]
    fn chaise_consumes_whole_run() {
        let spec = SofaSpec::l_shaped(Topology::LCorner, 300.0, 250.0, 70.0)
            .with_backrests(Sides::of(&[Side::Left, Side::Bottom]))
            .with_chaise(Side::Left, 240.0);
        let layout = build_layout(&spec).unwrap();
        let left = layout.cushions.branch(Side::Left).unwrap();
        //the run stops at the corner boundary, 90 cm from the frame corner
        assert_eq!(left.nominal_length, 90);
        assert_eq!(layout.summary.n_banquettes(), 2);
    }

    #[test]
    fn bolster_on_run_taken_by_chaise_leaves_no_cushions() {
        let spec = SofaSpec::straight(250.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_chaise(Side::Left, 250.0)
            .with_bolsters(Sides::of(&[Side::Left]));
        let layout = build_layout(&spec).unwrap();
        assert_eq!(layout.cushions.total_count(), 0);
        assert!(layout.cushions.bolsters.is_empty());
        assert_eq!(layout.cushions.branch(Side::Bottom).unwrap().nominal_length, 0);
    }

    #[test]
    fn spec_from_json() {
        let json = r#"{
            "topology": {"kind": "u_one_corner"},
            "width": 330,
            "left_height": 240,
            "right_height": 220,
            "backrests": {"left": true, "bottom": true, "right": true},
            "armrests": {"left": true, "right": true},
            "bolsters": {"right": true},
            "cushions": "g"
        }"#;
        let spec: SofaSpec = serde_json::from_str(json).unwrap();
        let layout = build_layout(&spec).unwrap();
        assert!(layout.arrangement.variant.is_some());
        assert!(layout.cushions.branches.iter().all(|b| (76..=100).contains(&b.size)));
        assert_eq!(layout.summary.cushion_policy, "g");
    }

    #[test]
    fn summary_display() {
        let spec = SofaSpec::straight(280.0, 70.0)
            .with_backrests(Sides::of(&[Side::Bottom]))
            .with_armrests(Sides::of(&[Side::Left, Side::Right]));
        let text = build_layout(&spec).unwrap().summary.to_string();
        assert!(text.starts_with("Sofa: straight, 280 x 80 cm, depth 70 cm"));
        assert!(text.contains("bottom 3 x 80 cm"));
    }

    #[test]
    fn missing_right_height() {
        let mut spec =
            SofaSpec::u_shaped(Topology::UTwoCorners, 400.0, 250.0, 250.0, 70.0);
        spec.right_height = None;
        let err = build_layout(&spec).unwrap_err();
        assert!(matches!(
            err.config_error(),
            Some(ConfigError::MissingDimension {
                name: "right_height",
                ..
            })
        ));
    }
}
