use log::info;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use super::{Estimate, Method, Query};
use crate::bnet::common::error::Result;
use crate::bnet::network::Network;

/// One (query, method) pair to run against a shared network.
#[derive(Debug, Clone)]
pub struct Job {
    pub query: Query,
    pub method: Method,
    pub samples: usize,
}

/// Runs every job in parallel.
///
/// The network is only read; each job owns its assignment buffer and a
/// `StdRng` seeded with `seed + position`, so results do not depend on
/// scheduling.
pub fn run_jobs(network: &Network, jobs: &[Job], seed: u64) -> Vec<Result<Estimate>> {
    info!("running {} inference job(s) with base seed {}", jobs.len(), seed);
    jobs.par_iter()
        .enumerate()
        .map(|(position, job)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(position as u64));
            job.method
                .sampler()
                .estimate(network, &job.query, job.samples, &mut rng)
        })
        .collect()
}
