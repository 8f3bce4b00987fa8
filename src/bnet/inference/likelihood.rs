use log::debug;
use rand::{Rng, RngCore};

use super::{Estimate, Method, Query, Sampler, Tally};
use crate::bnet::common::error::Result;
use crate::bnet::network::Network;

/// Estimates P(query | evidence) by forcing the evidence and weighting each
/// sample by how likely the evidence was. No sample is discarded.
pub struct LikelihoodWeighter;

impl LikelihoodWeighter {
    pub fn run<R: Rng + ?Sized>(
        network: &Network,
        query: &Query,
        samples: usize,
        rng: &mut R,
    ) -> Result<Estimate> {
        debug!(
            "likelihood weighting {} with {} samples",
            query.describe(network),
            samples
        );
        let mut assignment = network.new_assignment();
        let mut tally = Tally::default();

        for _ in 0..samples {
            let weight = network.weighted_sample(&query.evidence, &mut assignment, rng)?;
            tally.record(assignment.get(query.target) == Some(true), weight);
        }

        let estimate = tally.finish(
            Method::LikelihoodWeighting,
            samples,
            "every sample had zero weight",
        )?;
        debug!(
            "likelihood weighting estimate {:.5} (true mass {:.5}, false mass {:.5})",
            estimate.probability, estimate.true_mass, estimate.false_mass
        );
        Ok(estimate)
    }
}

impl Sampler for LikelihoodWeighter {
    fn estimate(
        &self,
        network: &Network,
        query: &Query,
        samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Estimate> {
        LikelihoodWeighter::run(network, query, samples, rng)
    }
}

/// Likelihood weighting over node indices, returning P(query = true | evidence).
pub fn likelihood_weighting<R: Rng + ?Sized>(
    network: &Network,
    query: usize,
    evidence_indices: &[usize],
    evidence_values: &[bool],
    samples: usize,
    rng: &mut R,
) -> Result<f64> {
    let query = Query::new(network, query, evidence_indices, evidence_values)?;
    Ok(LikelihoodWeighter::run(network, &query, samples, rng)?.probability)
}
