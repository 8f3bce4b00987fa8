use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};

use crate::bnet::inference::{Estimate, Method, Query};
use crate::bnet::network::Network;

/// One estimate, with enough context to reproduce it.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub scenario: String,
    pub query: String,
    pub target: String,
    pub evidence: Vec<(String, bool)>,
    pub method: Method,
    pub samples: usize,
    pub seed: u64,
    /// Absent when the run failed; `error` says why.
    pub estimate: Option<Estimate>,
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl QueryReport {
    pub fn new(
        scenario: &str,
        network: &Network,
        query: &Query,
        method: Method,
        samples: usize,
        seed: u64,
        outcome: &crate::bnet::common::error::Result<Estimate>,
    ) -> QueryReport {
        let (estimate, error) = match outcome {
            Ok(estimate) => (Some(estimate.clone()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        QueryReport {
            scenario: scenario.to_string(),
            query: query.describe(network),
            target: network.node(query.target).name.clone(),
            evidence: query
                .evidence
                .pairs()
                .iter()
                .map(|&(i, v)| (network.node(i).name.clone(), v))
                .collect(),
            method,
            samples,
            seed,
            estimate,
            error,
            generated_at: Utc::now(),
        }
    }
}

/// Writes the reports as a pretty-printed JSON array.
pub fn write_reports(path: &Path, reports: &[QueryReport]) -> std::io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, reports)?;
    Ok(())
}
