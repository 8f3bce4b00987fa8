pub mod error;
pub mod interface;
#[macro_use]
pub mod logging;
pub mod report;
pub mod setup;

// Re-export key types
pub use error::{ConfigurationError, Result, SamplingError};
pub use interface::{QuerySpec, ScenarioMaker};
pub use setup::CommandLineOptions;
