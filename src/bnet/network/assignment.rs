use serde::Serialize;
use std::collections::BTreeMap;

/// Working values for every node of a network, keyed by node index.
///
/// Exactly one sampler writes to a given buffer at a time. Buffers are reused
/// between samples, so nothing here is kept once it has been overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    /// Creates an assignment with every node unassigned.
    pub fn new(len: usize) -> Assignment {
        Assignment {
            values: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, value: bool) {
        self.values[index] = Some(value);
    }

    /// True when every node holds a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Values in node order; `None` for unassigned nodes.
    pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        self.values.iter().copied()
    }

    /// The assigned nodes as an index-to-value map.
    pub fn to_map(&self) -> BTreeMap<usize, bool> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
            .collect()
    }
}
