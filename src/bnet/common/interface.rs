use crate::bnet::common::error::Result;
use crate::bnet::inference::Query;
use crate::bnet::network::Network;

/// A query stated by node names, as a scenario suggests it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub description: String,
    pub target: String,
    pub evidence: Vec<(String, bool)>,
    /// Number of samples the scenario suggests for this query.
    pub samples: usize,
}

impl QuerySpec {
    pub fn new(description: &str, target: &str, evidence: &[(&str, bool)], samples: usize) -> QuerySpec {
        QuerySpec {
            description: description.to_string(),
            target: target.to_string(),
            evidence: evidence.iter().map(|(n, v)| (n.to_string(), *v)).collect(),
            samples,
        }
    }

    /// Resolves the names against a network.
    pub fn resolve(&self, network: &Network) -> Result<Query> {
        let evidence: Vec<(&str, bool)> = self
            .evidence
            .iter()
            .map(|(n, v)| (n.as_str(), *v))
            .collect();
        Query::from_names(network, &self.target, &evidence)
    }
}

/// Builds one concrete network and knows which questions are worth asking it.
pub trait ScenarioMaker {
    fn name(&self) -> &'static str;

    fn build_network(&self) -> Result<Network>;

    fn canonical_queries(&self) -> Vec<QuerySpec>;
}
