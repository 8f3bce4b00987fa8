use log::debug;
use rand::{Rng, RngCore};

use super::{Estimate, Method, Query, Sampler, Tally};
use crate::bnet::common::error::Result;
use crate::bnet::network::Network;

/// Estimates P(query | evidence) from prior samples that agree with the evidence.
pub struct RejectionSampler;

impl RejectionSampler {
    pub fn run<R: Rng + ?Sized>(
        network: &Network,
        query: &Query,
        samples: usize,
        rng: &mut R,
    ) -> Result<Estimate> {
        debug!(
            "rejection sampling {} with {} samples",
            query.describe(network),
            samples
        );
        let mut assignment = network.new_assignment();
        let mut tally = Tally::default();

        for _ in 0..samples {
            network.prior_sample_into(&mut assignment, rng)?;
            if network.test_evidence(&assignment, &query.evidence) {
                tally.record(assignment.get(query.target) == Some(true), 1.0);
            }
        }

        let estimate = tally.finish(
            Method::Rejection,
            samples,
            "no sample was consistent with the evidence",
        )?;
        debug!(
            "rejection sampling accepted {}/{} samples, estimate {:.5}",
            estimate.contributing, samples, estimate.probability
        );
        Ok(estimate)
    }
}

impl Sampler for RejectionSampler {
    fn estimate(
        &self,
        network: &Network,
        query: &Query,
        samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Estimate> {
        RejectionSampler::run(network, query, samples, rng)
    }
}

/// Rejection sampling over node indices, returning P(query = true | evidence).
pub fn rejection_sampling<R: Rng + ?Sized>(
    network: &Network,
    query: usize,
    evidence_indices: &[usize],
    evidence_values: &[bool],
    samples: usize,
    rng: &mut R,
) -> Result<f64> {
    let query = Query::new(network, query, evidence_indices, evidence_values)?;
    Ok(RejectionSampler::run(network, &query, samples, rng)?.probability)
}
