#[cfg(test)]
mod test_gibbs {
    use bayesample::bnet::common::error::{ConfigurationError, SamplingError};
    use bayesample::bnet::common::interface::ScenarioMaker;
    use bayesample::bnet::inference::{GibbsChain, Query};
    use bayesample::bnet::network::{Evidence, MarkovBlanket, Network, NetworkBuilder};
    use bayesample::bnet::scenarios::{sprinkler::Sprinkler, wet_grass::WetGrass};
    use bayesample::gibbs_ask;
    use rand::{rngs::StdRng, SeedableRng};

    fn wet_grass() -> Network {
        WetGrass {}.build_network().unwrap()
    }

    #[test]
    fn test_children_and_blanket() {
        let network = wet_grass();
        let blanket = MarkovBlanket::new(&network);
        // Cloudy, Drought, Sprinkler, Rain, PlayOutside, WetGrass
        assert_eq!(blanket.children(0), &[2, 3]);
        assert_eq!(blanket.children(1), &[2]);
        assert_eq!(blanket.children(3), &[4, 5]);
        assert!(blanket.children(5).is_empty());

        assert_eq!(blanket.blanket(&network, 2), vec![0, 1, 3, 5]);
        assert_eq!(blanket.blanket(&network, 3), vec![0, 2, 4, 5]);
        assert_eq!(blanket.blanket(&network, 1), vec![0, 2]);
        assert_eq!(blanket.blanket(&network, 4), vec![3]);
    }

    #[test]
    fn test_single_step_counts_the_initial_state() {
        let network = wet_grass();
        let query = Query::from_names(&network, "Rain", &[("WetGrass", true)]).unwrap();
        let chain = GibbsChain::new(&network);

        for seed in 0..20 {
            let mut peek = StdRng::seed_from_u64(seed);
            let initial = chain.initial_state(&query.evidence, &mut peek);
            let expected = if initial.get(query.target) == Some(true) { 1.0 } else { 0.0 };

            let mut rng = StdRng::seed_from_u64(seed);
            let estimate = chain.run(&query, 1, &mut rng).unwrap();
            assert_eq!(estimate.probability, expected);
            assert_eq!(estimate.iterations, 1);
        }
    }

    #[test]
    fn test_childless_node_uses_its_own_cpt() {
        let network = Sprinkler {}.build_network().unwrap();
        let chain = GibbsChain::new(&network);
        let wet = network.index_of("WetGrass").unwrap();

        let mut assignment = network.new_assignment();
        assignment.set(0, true);
        assignment.set(1, true);
        assignment.set(2, false);
        assignment.set(wet, false);

        let own = network.conditional_probability(wet, &assignment).unwrap();
        assert_eq!(own, 0.9);
        let p = chain.full_conditional(wet, &assignment).unwrap();
        assert!((p - own).abs() < 1e-12);
    }

    #[test]
    fn test_full_conditional_matches_hand_computation() {
        let network = NetworkBuilder::new()
            .node("A", &[], &[0.5])
            .node("B", &["A"], &[0.9, 0.1])
            .build()
            .unwrap();
        let chain = GibbsChain::new(&network);
        let mut assignment = network.new_assignment();
        assignment.set(0, false);
        assignment.set(1, true);
        let before = assignment.clone();

        // 0.5 * 0.9 / (0.5 * 0.9 + 0.5 * 0.1)
        let p = chain.full_conditional(0, &assignment).unwrap();
        assert!((p - 0.9).abs() < 1e-12);
        assert_eq!(assignment, before);

        assignment.set(1, false);
        let p = chain.full_conditional(0, &assignment).unwrap();
        assert!((p - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_shared_child_does_not_leak_overrides() {
        let network = Sprinkler {}.build_network().unwrap();
        let chain = GibbsChain::new(&network);
        let evidence = Evidence::from_names(&network, &[("WetGrass", true)]).unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let mut assignment = chain.initial_state(&evidence, &mut rng);

        for _ in 0..100 {
            for index in 0..3 {
                let snapshot = assignment.clone();
                chain.resample(index, &mut assignment, &mut rng).unwrap();
                for other in 0..network.len() {
                    if other != index {
                        assert_eq!(assignment.get(other), snapshot.get(other));
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_resample_is_reproducible() {
        let network = wet_grass();
        let chain = GibbsChain::new(&network);
        let evidence = Evidence::from_names(&network, &[("WetGrass", true)]).unwrap();

        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        let mut a = chain.initial_state(&evidence, &mut first);
        let mut b = chain.initial_state(&evidence, &mut second);
        assert_eq!(a, b);
        for index in [0, 1, 2, 3, 4] {
            assert_eq!(
                chain.resample(index, &mut a, &mut first).unwrap(),
                chain.resample(index, &mut b, &mut second).unwrap()
            );
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_sprinkler_posteriors() {
        let network = Sprinkler {}.build_network().unwrap();
        let mut rng = StdRng::seed_from_u64(31);
        let rain = network.index_of("Rain").unwrap();
        let sprinkler = network.index_of("Sprinkler").unwrap();
        let wet = network.index_of("WetGrass").unwrap();

        let p = gibbs_ask(&network, rain, &[sprinkler], &[true], 100_000, &mut rng).unwrap();
        assert!((p - 0.3).abs() < 0.02, "P(rain | sprinkler) = {}", p);

        let p = gibbs_ask(&network, rain, &[wet], &[true], 100_000, &mut rng).unwrap();
        assert!((p - 0.7079).abs() < 0.02, "P(rain | wet grass) = {}", p);
    }

    #[test]
    fn test_wet_grass_posterior() {
        let network = wet_grass();
        let query = Query::from_names(
            &network,
            "Rain",
            &[("PlayOutside", false), ("WetGrass", true)],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let estimate = GibbsChain::new(&network).run(&query, 100_000, &mut rng).unwrap();
        assert!((estimate.probability - 0.8166).abs() < 0.02);
        assert_eq!(estimate.contributing, 100_000);
    }

    #[test]
    fn test_errors() {
        let network = NetworkBuilder::new()
            .node("A", &[], &[0.5])
            .node("B", &["A"], &[0.0, 0.0])
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let err = gibbs_ask(&network, 0, &[1], &[true], 10, &mut rng).unwrap_err();
        assert!(err.is_degenerate());

        let err = gibbs_ask(&network, 0, &[1], &[false], 0, &mut rng).unwrap_err();
        assert!(err.is_degenerate());

        assert_eq!(
            gibbs_ask(&network, 1, &[1], &[true], 10, &mut rng).unwrap_err(),
            SamplingError::Configuration(ConfigurationError::QueryIsEvidence(1))
        );
    }
}
