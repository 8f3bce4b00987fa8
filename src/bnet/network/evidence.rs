use serde::Serialize;

use super::{assignment::Assignment, graph::Network};
use crate::bnet::common::error::{ConfigurationError, Result};

/// Validated observations for one network.
///
/// Keeps the pairs in the order they were given and a per-node lookup so
/// that a sampling pass can ask "is this node observed?" in constant time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evidence {
    pairs: Vec<(usize, bool)>,
    #[serde(skip)]
    observed: Vec<Option<bool>>,
}

impl Evidence {
    /// Builds evidence from parallel index and value slices.
    pub fn new(network: &Network, indices: &[usize], values: &[bool]) -> Result<Evidence> {
        if indices.len() != values.len() {
            return Err(ConfigurationError::EvidenceLengthMismatch {
                indices: indices.len(),
                values: values.len(),
            }
            .into());
        }
        let len = network.len();
        let mut observed = vec![None; len];
        for (&index, &value) in indices.iter().zip(values) {
            if index >= len {
                return Err(ConfigurationError::EvidenceOutOfRange { index, len }.into());
            }
            if observed[index].is_some() {
                return Err(ConfigurationError::DuplicateEvidence(index).into());
            }
            observed[index] = Some(value);
        }
        Ok(Evidence {
            pairs: indices.iter().copied().zip(values.iter().copied()).collect(),
            observed,
        })
    }

    /// No observations at all.
    pub fn empty(network: &Network) -> Evidence {
        Evidence {
            pairs: Vec::new(),
            observed: vec![None; network.len()],
        }
    }

    /// Builds evidence from `(node name, value)` pairs.
    pub fn from_names(network: &Network, named: &[(&str, bool)]) -> Result<Evidence> {
        let mut indices = Vec::with_capacity(named.len());
        let mut values = Vec::with_capacity(named.len());
        for (name, value) in named {
            indices.push(network.index_of(name)?);
            values.push(*value);
        }
        Evidence::new(network, &indices, &values)
    }

    pub fn pairs(&self) -> &[(usize, bool)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The observed value of a node, if it is evidence.
    pub fn value_of(&self, index: usize) -> Option<bool> {
        self.observed.get(index).copied().flatten()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.value_of(index).is_some()
    }

    /// Number of nodes this evidence was validated against.
    pub fn network_len(&self) -> usize {
        self.observed.len()
    }

    /// Writes every observation into the assignment.
    pub fn apply(&self, assignment: &mut Assignment) {
        for &(index, value) in &self.pairs {
            assignment.set(index, value);
        }
    }
}
