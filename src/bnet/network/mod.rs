pub mod assignment;
pub mod blanket;
pub mod estimate;
pub mod evidence;
pub mod graph;
pub mod node;

pub use assignment::Assignment;
pub use blanket::MarkovBlanket;
pub use estimate::{estimate_cpt, TrainingExample, MAX_ESTIMATED_PARENTS};
pub use evidence::Evidence;
pub use graph::{Network, NetworkBuilder, NodeSpec};
pub use node::Node;
