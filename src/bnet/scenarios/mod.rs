pub mod chain;
pub mod factory;
pub mod sprinkler;
pub mod wet_grass;

pub use factory::ScenarioFactory;
