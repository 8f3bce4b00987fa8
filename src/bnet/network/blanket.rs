use log::trace;

use super::graph::Network;

/// Children of every node, derived once from the parent lists.
///
/// Together with the parent lists this gives each node's Markov blanket:
/// its parents, its children and its children's other parents.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovBlanket {
    children: Vec<Vec<usize>>,
}

impl MarkovBlanket {
    pub fn new(network: &Network) -> MarkovBlanket {
        let mut children = vec![Vec::new(); network.len()];
        for (child, node) in network.nodes().iter().enumerate() {
            for &parent in &node.parents {
                // a node listing the same parent twice is still one child
                if children[parent].last() != Some(&child) {
                    children[parent].push(child);
                }
            }
        }
        for (index, kids) in children.iter().enumerate() {
            trace!("children of {}: {:?}", network.node(index).name, kids);
        }
        MarkovBlanket { children }
    }

    /// Children of `index` in topological order.
    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// The full blanket of `index` in ascending order, without `index` itself.
    pub fn blanket(&self, network: &Network, index: usize) -> Vec<usize> {
        let mut members: Vec<usize> = network.node(index).parents.clone();
        for &child in self.children(index) {
            members.push(child);
            members.extend(network.node(child).parents.iter().copied());
        }
        members.retain(|&m| m != index);
        members.sort_unstable();
        members.dedup();
        members
    }
}
