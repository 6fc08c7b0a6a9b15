//! Labeling odometer: orbit-aware backtracking enumeration

use super::builder::{Node, Tree};
use super::equiv::EqTree;

/// Upper bound (exclusive) for a node's label. Frozen nodes, the original
/// vertices in edge mode, never leave label 0.
fn label_cap(node: &Node, max_label: u32) -> u32 {
    if node.labeled {
        max_label
    } else {
        1
    }
}

/// Copy a subtree's labeling onto a shape-identical sibling subtree,
/// position by position.
fn copy_branch(nodes: &mut [Node], src: usize, dst: usize) {
    nodes[dst].label = nodes[src].label;
    for i in 0..nodes[src].children.len() {
        let s = nodes[src].children[i];
        let d = nodes[dst].children[i];
        copy_branch(nodes, s, d);
    }
}

/// Reset a subtree's labels to 0.
fn reset_branch(nodes: &mut [Node], n: usize) {
    nodes[n].label = 0;
    for i in 0..nodes[n].children.len() {
        let c = nodes[n].children[i];
        reset_branch(nodes, c);
    }
}

/// Advance the odometer at `(n, en)` by one step.
///
/// Tries each equivalence-child run in order and each represented real child
/// within the run; when a child advances, its whole labeled subtree is copied
/// onto every earlier sibling of the same run, keeping the orbit in
/// lock-step. When no child can advance, `n`'s own label is incremented;
/// under the cap all descendants reset to 0 and the step succeeds, otherwise
/// `n` resets to 0 and the branch reports exhaustion.
fn advance(nodes: &mut [Node], eq: &EqTree, n: usize, en: usize, max_label: u32) -> bool {
    let mut base = 0;
    for e in 0..eq.nodes[en].children.len() {
        let eqnode = eq.nodes[en].children[e];
        let mult = eq.nodes[eqnode].mult;
        for j in 0..mult {
            let child = nodes[n].children[base + j];
            if nodes[child].label < label_cap(&nodes[child], max_label)
                && advance(nodes, eq, child, eqnode, max_label)
            {
                for k in 0..j {
                    let earlier = nodes[n].children[base + k];
                    copy_branch(nodes, child, earlier);
                }
                return true;
            }
        }
        base += mult;
    }

    nodes[n].label += 1;
    if nodes[n].label < label_cap(&nodes[n], max_label) {
        for i in 0..nodes[n].children.len() {
            let c = nodes[n].children[i];
            reset_branch(nodes, c);
        }
        true
    } else {
        nodes[n].label = 0;
        false
    }
}

/// Pull-based iterator over the labelings of one tree.
///
/// Owns the working tree and its equivalence tree exclusively; both are
/// mutated in place as the odometer advances, so a session cannot be
/// restarted or shared. Yields the all-zero labeling first, then one vector
/// per successful advance, reading the label-carrying nodes in ascending
/// arena order (the synthetic root, if any, is excluded).
#[derive(Debug)]
pub struct Labelings {
    tree: Tree,
    eq: EqTree,
    max_label: u32,
    emit: Vec<usize>,
    balanced: Vec<u32>,
    started: bool,
    done: bool,
}

impl Labelings {
    pub(crate) fn new(tree: Tree, eq: EqTree, max_label: u32) -> Labelings {
        let emit: Vec<usize> = (0..tree.nodes.len())
            .filter(|&i| Some(i) != tree.super_root && tree.nodes[i].labeled)
            .collect();
        let balanced: Vec<u32> = (0..tree.nodes.len())
            .filter(|&i| Some(i) != tree.super_root)
            .map(|i| tree.nodes[i].depth)
            .collect();
        Labelings {
            tree,
            eq,
            max_label,
            emit,
            balanced,
            started: false,
            done: false,
        }
    }

    /// The balanced (center-rooted) pre-order depth sequence the labelings
    /// are read off of; yielded vectors follow this node order.
    pub fn balanced(&self) -> &[u32] {
        &self.balanced
    }

    /// Length of each yielded vector: the vertex count in vertex mode, the
    /// edge count in edge mode.
    pub fn vector_len(&self) -> usize {
        self.emit.len()
    }

    fn snapshot(&self) -> Vec<u32> {
        self.emit
            .iter()
            .map(|&i| self.tree.nodes[i].label)
            .collect()
    }
}

impl Iterator for Labelings {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Vec<u32>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.snapshot());
        }

        let root = self.tree.root;
        if !advance(&mut self.tree.nodes, &self.eq, root, 0, self.max_label) {
            self.done = true;
            return None;
        }
        // A non-zero label on the synthetic root would swap the two
        // symmetric halves, which the first half's labelings already cover.
        if self.tree.super_root.is_some() && self.tree.nodes[root].label != 0 {
            self.done = true;
            return None;
        }
        Some(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use crate::enumerate_labelings;

    fn collect(sequence: &[u32], max_label: u32) -> Vec<Vec<u32>> {
        enumerate_labelings(sequence, max_label, false)
            .expect("valid input")
            .collect()
    }

    #[test]
    fn test_two_node_tree_identifies_swapped_labelings() {
        assert_eq!(
            collect(&[0, 1], 2),
            vec![vec![0, 0], vec![1, 0], vec![1, 1]]
        );
    }

    #[test]
    fn test_path_of_three_exact_sequence() {
        assert_eq!(
            collect(&[0, 1, 2], 2),
            vec![
                vec![0, 0, 0],
                vec![0, 1, 0],
                vec![0, 1, 1],
                vec![1, 0, 0],
                vec![1, 1, 0],
                vec![1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_unary_alphabet_yields_single_labeling() {
        assert_eq!(collect(&[0, 1], 1), vec![vec![0, 0]]);
    }

    #[test]
    fn test_balanced_sequence_exposed() {
        let labelings = enumerate_labelings(&[0, 1, 2], 2, false).unwrap();
        assert_eq!(labelings.balanced(), &[0, 1, 1]);
        assert_eq!(labelings.vector_len(), 3);
    }
}
