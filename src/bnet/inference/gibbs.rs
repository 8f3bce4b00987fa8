use log::{debug, trace};
use rand::{Rng, RngCore};

use super::{Estimate, Method, Query, Sampler, Tally};
use crate::bnet::common::error::{ConfigurationError, Result, SamplingError};
use crate::bnet::network::{Assignment, Evidence, MarkovBlanket, Network};

/// Markov chain Monte Carlo over the non-evidence nodes.
///
/// Each step resamples every free node, in topological order, from its
/// distribution given its Markov blanket. The chain has no burn-in and no
/// thinning. The query value is tallied at the start of every step, before
/// anything is resampled, so the first tally is the initial random state.
pub struct GibbsSampler;

impl Sampler for GibbsSampler {
    fn estimate(
        &self,
        network: &Network,
        query: &Query,
        samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Estimate> {
        GibbsChain::new(network).run(query, samples, rng)
    }
}

/// A network prepared for Gibbs sampling: the children of every node are
/// computed once and reused for each step.
pub struct GibbsChain<'a> {
    network: &'a Network,
    blanket: MarkovBlanket,
}

impl<'a> GibbsChain<'a> {
    pub fn new(network: &'a Network) -> GibbsChain<'a> {
        GibbsChain {
            network,
            blanket: MarkovBlanket::new(network),
        }
    }

    /// P(node = true | its Markov blanket) under the current assignment.
    ///
    /// The node's own value is never read. Children are evaluated with the
    /// node overridden to true and to false without writing to `assignment`.
    pub fn full_conditional(&self, index: usize, assignment: &Assignment) -> Result<f64> {
        let mut p_true = self.network.conditional_probability(index, assignment)?;
        let mut p_false = 1.0 - p_true;

        for &child in self.blanket.children(index) {
            let pt = self
                .network
                .conditional_probability_with(child, assignment, index, true)?;
            let pf = self
                .network
                .conditional_probability_with(child, assignment, index, false)?;
            match assignment.get(child) {
                Some(true) => {
                    p_true *= pt;
                    p_false *= pf;
                }
                Some(false) => {
                    p_true *= 1.0 - pt;
                    p_false *= 1.0 - pf;
                }
                None => {
                    return Err(SamplingError::UndefinedQuery {
                        node: self.network.node(index).name.clone(),
                        missing: self.network.node(child).name.clone(),
                    });
                }
            }
        }

        let normaliser = p_true + p_false;
        if normaliser <= 0.0 {
            return Err(SamplingError::degenerate(
                Method::Gibbs,
                format!(
                    "full conditional of '{}' has zero mass",
                    self.network.node(index).name
                ),
            ));
        }
        Ok(p_true / normaliser)
    }

    /// Resamples one node from its full conditional; true iff the draw is `<=` it.
    pub fn resample<R: Rng + ?Sized>(
        &self,
        index: usize,
        assignment: &mut Assignment,
        rng: &mut R,
    ) -> Result<bool> {
        let p = self.full_conditional(index, assignment)?;
        let value = rng.r#gen::<f64>() <= p;
        assignment.set(index, value);
        Ok(value)
    }

    /// Fixes the evidence and gives every free node a fair coin flip.
    pub fn initial_state<R: Rng + ?Sized>(&self, evidence: &Evidence, rng: &mut R) -> Assignment {
        let mut assignment = self.network.new_assignment();
        evidence.apply(&mut assignment);
        for index in 0..self.network.len() {
            if !evidence.contains(index) {
                assignment.set(index, rng.r#gen::<bool>());
            }
        }
        assignment
    }

    /// Runs the chain for exactly `samples` steps.
    pub fn run<R: Rng + ?Sized>(&self, query: &Query, samples: usize, rng: &mut R) -> Result<Estimate> {
        if query.evidence.contains(query.target) {
            return Err(ConfigurationError::QueryIsEvidence(query.target).into());
        }
        debug!(
            "gibbs sampling {} with {} samples",
            query.describe(self.network),
            samples
        );

        let free: Vec<usize> = (0..self.network.len())
            .filter(|&i| !query.evidence.contains(i))
            .collect();
        let mut assignment = self.initial_state(&query.evidence, rng);
        trace!("initial state: {}", self.network.render_state(&assignment));
        let mut tally = Tally::default();

        for _ in 0..samples {
            tally.record(assignment.get(query.target) == Some(true), 1.0);
            for &index in &free {
                self.resample(index, &mut assignment, rng)?;
            }
        }

        let estimate = tally.finish(Method::Gibbs, samples, "the chain ran for zero steps")?;
        debug!("gibbs sampling estimate {:.5}", estimate.probability);
        Ok(estimate)
    }
}

/// Gibbs sampling over node indices, returning P(query = true | evidence).
pub fn gibbs_ask<R: Rng + ?Sized>(
    network: &Network,
    query: usize,
    evidence_indices: &[usize],
    evidence_values: &[bool],
    samples: usize,
    rng: &mut R,
) -> Result<f64> {
    let query = Query::new(network, query, evidence_indices, evidence_values)?;
    Ok(GibbsChain::new(network).run(&query, samples, rng)?.probability)
}
