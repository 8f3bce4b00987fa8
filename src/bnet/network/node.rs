use serde::Serialize;
use std::convert::Infallible;

use super::assignment::Assignment;

/// Number of CPT rows a node with `parents` parents needs, or `None` if it overflows.
pub fn cpt_rows(parents: usize) -> Option<usize> {
    u32::try_from(parents).ok().and_then(|p| 1usize.checked_shl(p))
}

/// Maps parent values to a CPT row.
///
/// The first parent is the most significant bit. A parent holding `false`
/// sets its bit, so row 0 is "all parents true" and the last row is
/// "all parents false".
pub fn cpt_index<I>(parent_values: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    match try_cpt_index(parent_values.into_iter().map(Ok::<bool, Infallible>)) {
        Ok(index) => index,
        Err(never) => match never {},
    }
}

/// Like `cpt_index`, but stops at the first parent value that is an error.
pub fn try_cpt_index<I, E>(parent_values: I) -> Result<usize, E>
where
    I: IntoIterator<Item = Result<bool, E>>,
{
    parent_values
        .into_iter()
        .try_fold(0, |index, value| Ok((index << 1) | usize::from(!value?)))
}

/// A binary random variable in a `Network`.
///
/// Parents are indices into the owning network's node list and always point
/// at earlier nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub parents: Vec<usize>,
    pub cpt: Vec<f64>,
}

impl Node {
    pub(crate) fn new(name: String, parents: Vec<usize>, cpt: Vec<f64>) -> Node {
        Node { name, parents, cpt }
    }

    /// Finds the CPT row for the current parent values.
    ///
    /// `overriding` replaces the value of one node for this lookup only, so
    /// the assignment itself is never touched. On failure the index of the
    /// first unassigned parent is returned.
    pub fn cpt_row(
        &self,
        assignment: &Assignment,
        overriding: Option<(usize, bool)>,
    ) -> Result<usize, usize> {
        try_cpt_index(self.parents.iter().map(|&parent| match overriding {
            Some((node, value)) if node == parent => Ok(value),
            _ => assignment.get(parent).ok_or(parent),
        }))
    }

    /// Probability that this node is true for the given CPT row.
    pub fn probability_at(&self, row: usize) -> f64 {
        self.cpt[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpt_index_is_msb_first() {
        assert_eq!(cpt_index([]), 0);
        assert_eq!(cpt_index([true, true]), 0);
        assert_eq!(cpt_index([true, false]), 1);
        assert_eq!(cpt_index([false, true]), 2);
        assert_eq!(cpt_index([false, false]), 3);
        assert_eq!(cpt_index([false, true, true]), 4);
    }

    #[test]
    fn test_cpt_rows() {
        assert_eq!(cpt_rows(0), Some(1));
        assert_eq!(cpt_rows(4), Some(16));
        assert_eq!(cpt_rows(200), None);
    }

    #[test]
    fn test_override_does_not_need_assignment() {
        let node = Node::new("B".to_string(), vec![0], vec![0.9, 0.1]);
        let assignment = Assignment::new(2);
        assert_eq!(node.cpt_row(&assignment, None), Err(0));
        assert_eq!(node.cpt_row(&assignment, Some((0, true))), Ok(0));
        assert_eq!(node.cpt_row(&assignment, Some((0, false))), Ok(1));
    }

    #[test]
    fn test_cpt_row_agrees_with_cpt_index() {
        let node = Node::new("D".to_string(), vec![0, 1, 2], vec![0.5; 8]);
        let mut assignment = Assignment::new(4);
        assert_eq!(node.cpt_row(&assignment, None), Err(0));
        assignment.set(0, false);
        assignment.set(2, true);
        assert_eq!(node.cpt_row(&assignment, None), Err(1));

        for values in [[true, true, true], [false, true, false], [true, false, false]] {
            for (i, &value) in values.iter().enumerate() {
                assignment.set(i, value);
            }
            assert_eq!(node.cpt_row(&assignment, None), Ok(cpt_index(values)));
        }
        assert_eq!(node.cpt_row(&assignment, Some((1, true))), Ok(cpt_index([true, true, false])));
    }

    #[test]
    fn test_try_cpt_index_stops_at_first_error() {
        assert_eq!(try_cpt_index::<_, usize>([Ok(false), Ok(true)]), Ok(2));
        assert_eq!(try_cpt_index([Ok(true), Err(7), Err(9)]), Err(7));
    }
}
