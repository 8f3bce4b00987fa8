use log::trace;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

use super::{
    assignment::Assignment,
    evidence::Evidence,
    node::{cpt_rows, Node},
};
use crate::bnet::common::error::{ConfigurationError, Result, SamplingError};

/// Description of one node as handed over by whoever builds the network.
///
/// Parents are referenced by name and must already have been described.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub name: String,
    pub parents: Vec<String>,
    pub cpt: Vec<f64>,
}

impl NodeSpec {
    pub fn new(name: &str, parents: &[&str], cpt: &[f64]) -> NodeSpec {
        NodeSpec {
            name: name.to_string(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            cpt: cpt.to_vec(),
        }
    }
}

/// A discrete Bayesian network of binary variables.
///
/// Nodes are stored in topological order: every parent index is smaller than
/// the index of its child. The topology never changes after construction and
/// the network holds no sampling state, so it can be shared freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    nodes: Vec<Node>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Network {
    /// Builds a network from topologically sorted node descriptions.
    pub fn construct(specs: Vec<NodeSpec>) -> Result<Network> {
        let mut nodes: Vec<Node> = Vec::with_capacity(specs.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(specs.len());

        for spec in specs {
            if spec.name.is_empty() {
                return Err(ConfigurationError::EmptyName.into());
            }
            if index.contains_key(&spec.name) {
                return Err(ConfigurationError::DuplicateNode(spec.name).into());
            }

            let mut parents = Vec::with_capacity(spec.parents.len());
            for parent in &spec.parents {
                match index.get(parent) {
                    Some(&p) => parents.push(p),
                    None => {
                        return Err(ConfigurationError::UnknownParent {
                            node: spec.name.clone(),
                            parent: parent.clone(),
                        }
                        .into());
                    }
                }
            }

            let expected = cpt_rows(parents.len()).unwrap_or(usize::MAX);
            if spec.cpt.len() != expected {
                return Err(ConfigurationError::CptLength {
                    node: spec.name,
                    parents: parents.len(),
                    expected,
                    actual: spec.cpt.len(),
                }
                .into());
            }
            if let Some((row, &value)) = spec
                .cpt
                .iter()
                .enumerate()
                .find(|(_, p)| !(0.0..=1.0).contains(*p))
            {
                return Err(ConfigurationError::InvalidProbability {
                    node: spec.name,
                    row,
                    value,
                }
                .into());
            }

            trace!("node {} = {} parents {:?}", nodes.len(), spec.name, parents);
            index.insert(spec.name.clone(), nodes.len());
            nodes.push(Node::new(spec.name, parents, spec.cpt));
        }

        Ok(Network { nodes, index })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownNode(name.to_string()).into())
    }

    /// A fresh buffer with every node unassigned.
    pub fn new_assignment(&self) -> Assignment {
        Assignment::new(self.nodes.len())
    }

    /// Probability that node `index` is true given its parents' values.
    pub fn conditional_probability(&self, index: usize, assignment: &Assignment) -> Result<f64> {
        self.lookup(index, assignment, None)
    }

    /// Like `conditional_probability`, but reads `value` for node `forced`
    /// instead of whatever the assignment holds.
    pub fn conditional_probability_with(
        &self,
        index: usize,
        assignment: &Assignment,
        forced: usize,
        value: bool,
    ) -> Result<f64> {
        self.lookup(index, assignment, Some((forced, value)))
    }

    fn lookup(
        &self,
        index: usize,
        assignment: &Assignment,
        overriding: Option<(usize, bool)>,
    ) -> Result<f64> {
        let node = &self.nodes[index];
        match node.cpt_row(assignment, overriding) {
            Ok(row) => Ok(node.probability_at(row)),
            Err(parent) => Err(SamplingError::UndefinedQuery {
                node: node.name.clone(),
                missing: self.nodes[parent].name.clone(),
            }),
        }
    }

    /// Samples one node from its CPT row; true iff the draw is `<=` the probability.
    pub fn sample_node<R: Rng + ?Sized>(
        &self,
        index: usize,
        assignment: &mut Assignment,
        rng: &mut R,
    ) -> Result<bool> {
        let p = self.conditional_probability(index, assignment)?;
        let value = rng.r#gen::<f64>() <= p;
        assignment.set(index, value);
        Ok(value)
    }

    /// Ancestral sample of the whole network into an existing buffer.
    pub fn prior_sample_into<R: Rng + ?Sized>(
        &self,
        assignment: &mut Assignment,
        rng: &mut R,
    ) -> Result<()> {
        for index in 0..self.nodes.len() {
            self.sample_node(index, assignment, rng)?;
        }
        Ok(())
    }

    /// Draws one joint sample from the prior.
    pub fn prior_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Assignment> {
        let mut assignment = self.new_assignment();
        self.prior_sample_into(&mut assignment, rng)?;
        Ok(assignment)
    }

    /// True iff every observed node holds its observed value.
    pub fn test_evidence(&self, assignment: &Assignment, evidence: &Evidence) -> bool {
        evidence
            .pairs()
            .iter()
            .all(|&(index, value)| assignment.get(index) == Some(value))
    }

    /// One likelihood-weighted sample.
    ///
    /// Evidence nodes are forced to their observed value and multiply the
    /// weight by the probability of that value; all other nodes are sampled.
    /// Returns the weight and leaves the generated values in `assignment`.
    pub fn weighted_sample<R: Rng + ?Sized>(
        &self,
        evidence: &Evidence,
        assignment: &mut Assignment,
        rng: &mut R,
    ) -> Result<f64> {
        debug_assert_eq!(evidence.network_len(), self.nodes.len());
        let mut weight = 1.0;
        for index in 0..self.nodes.len() {
            match evidence.value_of(index) {
                Some(value) => {
                    assignment.set(index, value);
                    let p = self.conditional_probability(index, assignment)?;
                    weight *= if value { p } else { 1.0 - p };
                }
                None => {
                    self.sample_node(index, assignment, rng)?;
                }
            }
        }
        Ok(weight)
    }

    /// Renders the assignment as `Name = value` pairs in network order.
    pub fn render_state(&self, assignment: &Assignment) -> String {
        self.nodes
            .iter()
            .zip(assignment.iter())
            .map(|(node, value)| match value {
                Some(value) => format!("{} = {}", node.name, value),
                None => format!("{} = None", node.name),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Collects node descriptions and builds a `Network` from them.
#[derive(Debug, Default, Clone)]
pub struct NetworkBuilder {
    specs: Vec<NodeSpec>,
}

impl NetworkBuilder {
    pub fn new() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    pub fn node(mut self, name: &str, parents: &[&str], cpt: &[f64]) -> NetworkBuilder {
        self.specs.push(NodeSpec::new(name, parents, cpt));
        self
    }

    pub fn build(self) -> Result<Network> {
        Network::construct(self.specs)
    }
}
