#[cfg(test)]
mod test_network {
    use bayesample::bnet::common::error::{ConfigurationError, SamplingError};
    use bayesample::bnet::network::{Evidence, Network, NetworkBuilder, NodeSpec};
    use rand::{rngs::StdRng, SeedableRng};

    fn chain() -> Network {
        NetworkBuilder::new()
            .node("A", &[], &[0.5])
            .node("B", &["A"], &[0.9, 0.1])
            .build()
            .unwrap()
    }

    fn roots(count: usize) -> Vec<NodeSpec> {
        (0..count)
            .map(|i| NodeSpec::new(&format!("P{}", i), &[], &[0.5]))
            .collect()
    }

    #[test]
    fn test_cpt_length_must_match_parent_count() {
        for parents in 0..=4usize {
            let expected = 1usize << parents;
            let names: Vec<String> = (0..parents).map(|i| format!("P{}", i)).collect();
            let parent_refs: Vec<&str> = names.iter().map(String::as_str).collect();

            for wrong in [expected + 1, expected - 1] {
                let mut specs = roots(parents);
                specs.push(NodeSpec::new("X", &parent_refs, &vec![0.5; wrong]));
                let err = Network::construct(specs).unwrap_err();
                assert_eq!(
                    err,
                    SamplingError::Configuration(ConfigurationError::CptLength {
                        node: "X".to_string(),
                        parents,
                        expected,
                        actual: wrong,
                    })
                );
            }

            let mut specs = roots(parents);
            specs.push(NodeSpec::new("X", &parent_refs, &vec![0.5; expected]));
            assert_eq!(Network::construct(specs).unwrap().len(), parents + 1);
        }
    }

    #[test]
    fn test_parents_must_already_exist() {
        let err = NetworkBuilder::new()
            .node("B", &["A"], &[0.9, 0.1])
            .node("A", &[], &[0.5])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SamplingError::Configuration(ConfigurationError::UnknownParent { .. })
        ));
    }

    #[test]
    fn test_names_and_probabilities_are_validated() {
        let duplicate = NetworkBuilder::new()
            .node("A", &[], &[0.5])
            .node("A", &[], &[0.5])
            .build();
        assert!(matches!(
            duplicate,
            Err(SamplingError::Configuration(ConfigurationError::DuplicateNode(_)))
        ));

        let out_of_range = NetworkBuilder::new().node("A", &[], &[1.5]).build();
        assert!(matches!(
            out_of_range,
            Err(SamplingError::Configuration(ConfigurationError::InvalidProbability { .. }))
        ));

        let nan = NetworkBuilder::new().node("A", &[], &[f64::NAN]).build();
        assert!(nan.unwrap_err().is_configuration());
    }

    #[test]
    fn test_indexing_law() {
        let network = NetworkBuilder::new()
            .node("A", &[], &[0.5])
            .node("B", &[], &[0.5])
            .node("C", &["A", "B"], &[0.11, 0.22, 0.33, 0.44])
            .build()
            .unwrap();
        let cases = [
            (true, true, 0.11),
            (true, false, 0.22),
            (false, true, 0.33),
            (false, false, 0.44),
        ];
        for (a, b, expected) in cases {
            let mut assignment = network.new_assignment();
            assignment.set(0, a);
            assignment.set(1, b);
            assert_eq!(network.conditional_probability(2, &assignment).unwrap(), expected);
        }
    }

    #[test]
    fn test_lookup_with_unassigned_parent_is_an_error() {
        let network = chain();
        let assignment = network.new_assignment();
        assert_eq!(network.conditional_probability(0, &assignment).unwrap(), 0.5);
        assert_eq!(
            network.conditional_probability(1, &assignment).unwrap_err(),
            SamplingError::UndefinedQuery {
                node: "B".to_string(),
                missing: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_override_leaves_assignment_alone() {
        let network = chain();
        let mut assignment = network.new_assignment();
        assignment.set(0, true);
        let before = assignment.clone();
        assert_eq!(
            network.conditional_probability_with(1, &assignment, 0, false).unwrap(),
            0.1
        );
        assert_eq!(assignment, before);
    }

    #[test]
    fn test_prior_sample_assigns_every_node() {
        let network = chain();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let sample = network.prior_sample(&mut rng).unwrap();
            assert!(sample.is_complete());
            assert_eq!(sample.to_map().len(), network.len());
        }
    }

    #[test]
    fn test_sample_node_uses_inclusive_threshold() {
        let network = NetworkBuilder::new()
            .node("Always", &[], &[1.0])
            .node("Never", &[], &[0.0])
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut assignment = network.new_assignment();
        for _ in 0..1000 {
            assert!(network.sample_node(0, &mut assignment, &mut rng).unwrap());
            // a draw of exactly 0.0 would be true; it is astronomically unlikely here
            assert!(!network.sample_node(1, &mut assignment, &mut rng).unwrap());
        }
    }

    #[test]
    fn test_evidence_predicate() {
        let network = chain();
        let mut assignment = network.new_assignment();
        assignment.set(0, true);
        assignment.set(1, false);

        assert!(network.test_evidence(&assignment, &Evidence::empty(&network)));
        assert!(network.test_evidence(&assignment, &Evidence::new(&network, &[0], &[true]).unwrap()));
        assert!(network.test_evidence(
            &assignment,
            &Evidence::new(&network, &[1, 0], &[false, true]).unwrap()
        ));
        assert!(!network.test_evidence(
            &assignment,
            &Evidence::new(&network, &[0, 1], &[true, true]).unwrap()
        ));
    }

    #[test]
    fn test_evidence_validation() {
        let network = chain();
        assert_eq!(
            Evidence::new(&network, &[2], &[true]).unwrap_err(),
            SamplingError::Configuration(ConfigurationError::EvidenceOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            Evidence::new(&network, &[1, 1], &[true, false]).unwrap_err(),
            SamplingError::Configuration(ConfigurationError::DuplicateEvidence(1))
        );
        assert!(Evidence::new(&network, &[0, 1], &[true]).unwrap_err().is_configuration());
        assert!(Evidence::from_names(&network, &[("C", true)]).unwrap_err().is_configuration());
    }

    #[test]
    fn test_weighted_sample_forces_evidence() {
        let network = chain();
        let evidence = Evidence::new(&network, &[1], &[false]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut assignment = network.new_assignment();
        for _ in 0..200 {
            let weight = network
                .weighted_sample(&evidence, &mut assignment, &mut rng)
                .unwrap();
            assert!(assignment.is_complete());
            assert_eq!(assignment.get(1), Some(false));
            let expected = if assignment.get(0) == Some(true) { 0.1 } else { 0.9 };
            assert!((weight - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sampling_is_reproducible_with_a_seed() {
        let network = chain();
        let evidence = Evidence::new(&network, &[1], &[true]).unwrap();
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                network.prior_sample(&mut first).unwrap(),
                network.prior_sample(&mut second).unwrap()
            );
            let mut a = network.new_assignment();
            let mut b = network.new_assignment();
            let wa = network.weighted_sample(&evidence, &mut a, &mut first).unwrap();
            let wb = network.weighted_sample(&evidence, &mut b, &mut second).unwrap();
            assert_eq!(wa, wb);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_render_state() {
        let network = chain();
        let mut assignment = network.new_assignment();
        assert_eq!(network.render_state(&assignment), "A = None, B = None");
        assignment.set(0, true);
        assert_eq!(network.render_state(&assignment), "A = true, B = None");
        assignment.set(1, false);
        assert_eq!(network.render_state(&assignment), "A = true, B = false");
    }
}
