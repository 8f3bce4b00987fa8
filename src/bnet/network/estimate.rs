use super::node::{cpt_index, cpt_rows};
use crate::bnet::common::error::{ConfigurationError, Result};

/// One observation of a variable together with its parents' values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub parents: Vec<bool>,
    pub value: bool,
}

impl TrainingExample {
    pub fn new(parents: &[bool], value: bool) -> TrainingExample {
        TrainingExample {
            parents: parents.to_vec(),
            value,
        }
    }
}

/// Largest parent count `estimate_cpt` accepts; it keeps two counters per row.
pub const MAX_ESTIMATED_PARENTS: usize = 20;

/// Estimates a CPT by counting how often the variable was true for each
/// parent configuration.
///
/// Rows follow the same ordering as CPT lookups. Every configuration needs
/// at least one example, and at most `MAX_ESTIMATED_PARENTS` parents are
/// supported.
pub fn estimate_cpt(num_parents: usize, examples: &[TrainingExample]) -> Result<Vec<f64>> {
    let rows = cpt_rows(num_parents)
        .filter(|_| num_parents <= MAX_ESTIMATED_PARENTS)
        .ok_or(ConfigurationError::TooManyParents {
            parents: num_parents,
            max: MAX_ESTIMATED_PARENTS,
        })?;
    let mut positive = vec![0usize; rows];
    let mut total = vec![0usize; rows];

    for example in examples {
        if example.parents.len() != num_parents {
            return Err(ConfigurationError::TrainingArity {
                expected: num_parents,
                actual: example.parents.len(),
            }
            .into());
        }
        let row = cpt_index(example.parents.iter().copied());
        total[row] += 1;
        if example.value {
            positive[row] += 1;
        }
    }

    positive
        .iter()
        .zip(&total)
        .enumerate()
        .map(|(row, (&p, &t))| {
            if t == 0 {
                Err(ConfigurationError::EmptyTrainingBucket { row }.into())
            } else {
                Ok(p as f64 / t as f64)
            }
        })
        .collect()
}
