use crate::bnet::common::error::Result;
use crate::bnet::common::interface::{QuerySpec, ScenarioMaker};
use crate::bnet::network::{Network, NetworkBuilder};

/// The four node Cloudy / Sprinkler / Rain / WetGrass network.
pub struct Sprinkler {}

impl ScenarioMaker for Sprinkler {
    fn name(&self) -> &'static str {
        "sprinkler"
    }

    fn build_network(&self) -> Result<Network> {
        NetworkBuilder::new()
            .node("Cloudy", &[], &[0.5])
            .node("Sprinkler", &["Cloudy"], &[0.1, 0.5])
            .node("Rain", &["Cloudy"], &[0.8, 0.2])
            .node("WetGrass", &["Sprinkler", "Rain"], &[0.99, 0.9, 0.9, 0.0])
            .build()
    }

    fn canonical_queries(&self) -> Vec<QuerySpec> {
        vec![
            QuerySpec::new("P(rain | sprinkler)", "Rain", &[("Sprinkler", true)], 100_000),
            QuerySpec::new("P(rain | wet grass)", "Rain", &[("WetGrass", true)], 100_000),
        ]
    }
}
