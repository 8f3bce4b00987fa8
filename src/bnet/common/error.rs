//! Error types for network construction and sampling-based inference.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Problems detected while building a network or validating a query.
///
/// These are fatal: no `Network` (or no run) is produced when one is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("node '{node}' has {parents} parent(s) and needs {expected} CPT rows, got {actual}")]
    CptLength {
        node: String,
        parents: usize,
        expected: usize,
        actual: usize,
    },

    #[error("node '{node}' has CPT row {row} = {value}, which is not a probability")]
    InvalidProbability { node: String, row: usize, value: f64 },

    /// The parent is unknown or has not been constructed yet (breaks topological order).
    #[error("node '{node}' refers to parent '{parent}' which has not been constructed")]
    UnknownParent { node: String, parent: String },

    #[error("node name '{0}' is used more than once")]
    DuplicateNode(String),

    #[error("node names must not be empty")]
    EmptyName,

    #[error("no node named '{0}'")]
    UnknownNode(String),

    #[error("evidence index {index} is out of range for a network of {len} node(s)")]
    EvidenceOutOfRange { index: usize, len: usize },

    #[error("evidence index {0} is listed more than once")]
    DuplicateEvidence(usize),

    #[error("{indices} evidence index(es) but {values} evidence value(s)")]
    EvidenceLengthMismatch { indices: usize, values: usize },

    #[error("query index {index} is out of range for a network of {len} node(s)")]
    QueryOutOfRange { index: usize, len: usize },

    /// Gibbs sampling never resamples evidence, so the query must be free.
    #[error("query node {0} is also an evidence node")]
    QueryIsEvidence(usize),

    #[error("no training examples for parent configuration {row}")]
    EmptyTrainingBucket { row: usize },

    #[error("training example has {actual} parent value(s), expected {expected}")]
    TrainingArity { expected: usize, actual: usize },

    #[error("cannot estimate a CPT for {parents} parents, at most {max} are supported")]
    TooManyParents { parents: usize, max: usize },

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
}

/// Errors raised by the sampling engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A CPT lookup was attempted while a node it depends on had no value.
    #[error("undefined query: conditional probability of '{node}' needs '{missing}', which is unassigned")]
    UndefinedQuery { node: String, missing: String },

    /// The final normalisation had a zero denominator.
    #[error("degenerate estimate from {method}: {reason}")]
    DegenerateEstimate { method: String, reason: String },
}

impl SamplingError {
    pub fn degenerate(method: impl ToString, reason: impl ToString) -> Self {
        SamplingError::DegenerateEstimate {
            method: method.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, SamplingError::Configuration(_))
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, SamplingError::DegenerateEstimate { .. })
    }
}
