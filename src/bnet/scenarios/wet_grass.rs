use crate::bnet::common::error::Result;
use crate::bnet::common::interface::{QuerySpec, ScenarioMaker};
use crate::bnet::network::{estimate_cpt, Network, NetworkBuilder, TrainingExample};

/// Observations of (raining, playing outside).
pub const PLAYING_EXAMPLES: [(bool, bool); 13] = [
    (true, false),
    (true, false),
    (true, true),
    (true, false),
    (true, false),
    (false, true),
    (false, false),
    (false, true),
    (false, true),
    (false, true),
    (false, false),
    (false, true),
    (false, true),
];

/// P(PlayOutside | Rain) estimated from `PLAYING_EXAMPLES`.
///
/// Row 0 is "raining", row 1 is "not raining".
pub fn play_outside_probabilities() -> Result<Vec<f64>> {
    let examples: Vec<TrainingExample> = PLAYING_EXAMPLES
        .iter()
        .map(|&(raining, playing)| TrainingExample::new(&[raining], playing))
        .collect();
    estimate_cpt(1, &examples)
}

/// Six node network: Cloudy and Drought drive Sprinkler, Cloudy drives Rain,
/// Rain drives PlayOutside, and Sprinkler and Rain drive WetGrass.
pub struct WetGrass {}

impl ScenarioMaker for WetGrass {
    fn name(&self) -> &'static str {
        "wet_grass"
    }

    fn build_network(&self) -> Result<Network> {
        let play_outside = play_outside_probabilities()?;
        NetworkBuilder::new()
            .node("Cloudy", &[], &[0.4])
            .node("Drought", &[], &[0.002])
            .node("Sprinkler", &["Cloudy", "Drought"], &[0.02, 0.1, 0.15, 0.5])
            .node("Rain", &["Cloudy"], &[0.8, 0.1])
            .node("PlayOutside", &["Rain"], &play_outside)
            .node("WetGrass", &["Sprinkler", "Rain"], &[0.99, 0.9, 0.9, 0.0])
            .build()
    }

    fn canonical_queries(&self) -> Vec<QuerySpec> {
        vec![
            QuerySpec::new(
                "P(rain | wet grass, ~playing outside)",
                "Rain",
                &[("PlayOutside", false), ("WetGrass", true)],
                10_000,
            ),
            QuerySpec::new(
                "P(sprinklers | drought)",
                "Sprinkler",
                &[("Drought", true)],
                100_000,
            ),
            QuerySpec::new(
                "P(wet grass | rain, sprinklers)",
                "WetGrass",
                &[("Sprinkler", true), ("Rain", true)],
                10_000_000,
            ),
        ]
    }
}
