use crate::bnet::common::error::Result;
use crate::bnet::common::interface::{QuerySpec, ScenarioMaker};
use crate::bnet::network::{Network, NetworkBuilder};

/// A -> B with a fair A and a noisy copy B.
///
/// P(A | B = true) is exactly 0.9.
pub struct TwoNodeChain {}

impl ScenarioMaker for TwoNodeChain {
    fn name(&self) -> &'static str {
        "two_node_chain"
    }

    fn build_network(&self) -> Result<Network> {
        NetworkBuilder::new()
            .node("A", &[], &[0.5])
            .node("B", &["A"], &[0.9, 0.1])
            .build()
    }

    fn canonical_queries(&self) -> Vec<QuerySpec> {
        vec![QuerySpec::new("P(a | b)", "A", &[("B", true)], 50_000)]
    }
}
