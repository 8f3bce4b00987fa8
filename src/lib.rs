#[macro_use]
pub mod bnet;

pub use bnet::{
    gibbs_ask, likelihood_weighting, rejection_sampling, Assignment, ConfigurationError, Estimate,
    Evidence, Method, Network, NetworkBuilder, NodeSpec, Query, SamplingError,
};
