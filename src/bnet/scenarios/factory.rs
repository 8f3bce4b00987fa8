use std::rc::Rc;

use crate::bnet::common::error::{ConfigurationError, Result};
use crate::bnet::common::interface::ScenarioMaker;

use super::{chain::TwoNodeChain, sprinkler::Sprinkler, wet_grass::WetGrass};

pub struct ScenarioFactory;

impl ScenarioFactory {
    pub const NAMES: [&'static str; 3] = ["wet_grass", "sprinkler", "two_node_chain"];

    pub fn new_shared(name: &str) -> Result<Rc<dyn ScenarioMaker>> {
        match name {
            "wet_grass" => Ok(Rc::new(WetGrass {})),
            "sprinkler" => Ok(Rc::new(Sprinkler {})),
            "two_node_chain" => Ok(Rc::new(TwoNodeChain {})),
            _ => Err(ConfigurationError::UnknownScenario(name.to_string()).into()),
        }
    }
}
