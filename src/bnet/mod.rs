pub mod common;
pub mod inference;
pub mod network;
pub mod scenarios;

// Re-export printing macros
pub use crate::print_estimate;
pub use crate::print_section;
pub use crate::print_warning;

/// Exports the main types for easy access
pub use common::error::{ConfigurationError, SamplingError};
pub use inference::{gibbs_ask, likelihood_weighting, rejection_sampling, Estimate, Method, Query, Sampler};
pub use network::{Assignment, Evidence, MarkovBlanket, Network, NetworkBuilder, NodeSpec};
