pub mod batch;
pub mod gibbs;
pub mod likelihood;
pub mod rejection;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bnet::common::error::{ConfigurationError, Result, SamplingError};
use crate::bnet::network::{Evidence, Network};

pub use gibbs::{gibbs_ask, GibbsChain, GibbsSampler};
pub use likelihood::{likelihood_weighting, LikelihoodWeighter};
pub use rejection::{rejection_sampling, RejectionSampler};

/// The available approximate inference algorithms.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "rejection")]
    Rejection,
    #[serde(rename = "likelihood-weighting")]
    LikelihoodWeighting,
    #[serde(rename = "gibbs")]
    Gibbs,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Rejection, Method::LikelihoodWeighting, Method::Gibbs];

    /// A sampler implementing this method.
    pub fn sampler(self) -> Box<dyn Sampler> {
        match self {
            Method::Rejection => Box::new(RejectionSampler),
            Method::LikelihoodWeighting => Box::new(LikelihoodWeighter),
            Method::Gibbs => Box::new(GibbsSampler),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Rejection => "rejection sampling",
            Method::LikelihoodWeighting => "likelihood weighting",
            Method::Gibbs => "gibbs sampling",
        };
        write!(f, "{}", name)
    }
}

/// A query node together with validated evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub target: usize,
    pub evidence: Evidence,
}

impl Query {
    pub fn new(network: &Network, target: usize, indices: &[usize], values: &[bool]) -> Result<Query> {
        if target >= network.len() {
            return Err(ConfigurationError::QueryOutOfRange {
                index: target,
                len: network.len(),
            }
            .into());
        }
        Ok(Query {
            target,
            evidence: Evidence::new(network, indices, values)?,
        })
    }

    /// Builds a query from node names, e.g. `("Rain", &[("WetGrass", true)])`.
    pub fn from_names(network: &Network, target: &str, evidence: &[(&str, bool)]) -> Result<Query> {
        Ok(Query {
            target: network.index_of(target)?,
            evidence: Evidence::from_names(network, evidence)?,
        })
    }

    /// Human readable form, `P(Rain | PlayOutside=false, WetGrass=true)`.
    pub fn describe(&self, network: &Network) -> String {
        let target = &network.node(self.target).name;
        if self.evidence.is_empty() {
            return format!("P({})", target);
        }
        let given = self
            .evidence
            .pairs()
            .iter()
            .map(|&(i, v)| format!("{}={}", network.node(i).name, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("P({} | {})", target, given)
    }
}

/// Result of one inference run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub method: Method,
    /// Estimated P(query = true | evidence).
    pub probability: f64,
    pub true_mass: f64,
    pub false_mass: f64,
    /// Samples that contributed to the estimate (accepted ones for rejection sampling).
    pub contributing: usize,
    pub iterations: usize,
}

/// Running true/false totals for the query node.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Tally {
    true_mass: f64,
    false_mass: f64,
    contributing: usize,
}

impl Tally {
    pub(crate) fn record(&mut self, value: bool, weight: f64) {
        if value {
            self.true_mass += weight;
        } else {
            self.false_mass += weight;
        }
        self.contributing += 1;
    }

    /// Normalises the totals, failing when there is nothing to normalise.
    pub(crate) fn finish(self, method: Method, iterations: usize, reason: &str) -> Result<Estimate> {
        let total = self.true_mass + self.false_mass;
        if total <= 0.0 || !total.is_finite() {
            return Err(SamplingError::degenerate(method, reason));
        }
        Ok(Estimate {
            method,
            probability: self.true_mass / total,
            true_mass: self.true_mass,
            false_mass: self.false_mass,
            contributing: self.contributing,
            iterations,
        })
    }
}

/// An approximate inference algorithm over a `Network`.
///
/// Implementations keep their working assignment to themselves, so the
/// network is only ever read.
pub trait Sampler: Send + Sync {
    fn estimate(
        &self,
        network: &Network,
        query: &Query,
        samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Estimate>;
}
