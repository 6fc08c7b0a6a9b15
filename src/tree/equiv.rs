//! Equivalence-tree construction

use super::builder::Tree;

/// One node of the equivalence tree. `mult` is the size of the automorphism
/// orbit the node stands for: the length of the run of shape-identical
/// siblings it was contracted from.
#[derive(Debug)]
pub struct EqNode {
    pub(crate) children: Vec<usize>,
    pub(crate) mult: usize,
}

/// Compressed automorphism skeleton of a canonically sorted tree.
///
/// Mirrors the rooted tree's shape but collapses each maximal run of
/// adjacent, shape-identical sibling subtrees into a single node tagged with
/// the run length. Only the first subtree of a run is expanded; the others
/// are structurally identical. The root lives at index 0.
#[derive(Debug)]
pub struct EqTree {
    pub(crate) nodes: Vec<EqNode>,
}

impl EqTree {
    /// Build the equivalence tree of `tree`, which must be canonically
    /// sorted so that isomorphic sibling subtrees are adjacent.
    pub fn build(tree: &Tree) -> EqTree {
        let mut eq = EqTree {
            nodes: vec![EqNode {
                children: Vec::new(),
                mult: 1,
            }],
        };
        eq.contract(tree, tree.root, 0);
        eq
    }

    fn contract(&mut self, tree: &Tree, n: usize, en: usize) {
        let children = &tree.nodes[n].children;
        let mut i = 0;
        while i < children.len() {
            let mut j = i + 1;
            while j < children.len()
                && tree.nodes[children[j]].shape == tree.nodes[children[i]].shape
            {
                j += 1;
            }
            let id = self.nodes.len();
            self.nodes.push(EqNode {
                children: Vec::new(),
                mult: j - i,
            });
            self.nodes[en].children.push(id);
            self.contract(tree, children[i], id);
            i = j;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::vertex_entries;

    fn eq_tree(sequence: &[u32]) -> (Tree, EqTree) {
        let mut tree = Tree::build(&vertex_entries(sequence));
        tree.canonicalize();
        let eq = EqTree::build(&tree);
        (tree, eq)
    }

    #[test]
    fn test_star_contracts_to_single_orbit() {
        let (_, eq) = eq_tree(&[0, 1, 1, 1]);

        assert_eq!(eq.nodes.len(), 2);
        assert_eq!(eq.nodes[0].children, vec![1]);
        assert_eq!(eq.nodes[1].mult, 3);
        assert!(eq.nodes[1].children.is_empty());
    }

    #[test]
    fn test_distinct_shapes_stay_separate() {
        // a leaf and a two-node chain under the root: two orbits of size 1
        let (_, eq) = eq_tree(&[0, 1, 2, 1]);

        assert_eq!(eq.nodes[0].children.len(), 2);
        assert_eq!(eq.nodes[eq.nodes[0].children[0]].mult, 1);
        assert_eq!(eq.nodes[eq.nodes[0].children[1]].mult, 1);
    }

    #[test]
    fn test_nested_runs() {
        // two identical chains under the root: one orbit of size 2, whose
        // representative is expanded one level deeper
        let (_, eq) = eq_tree(&[0, 1, 2, 1, 2]);

        assert_eq!(eq.nodes[0].children.len(), 1);
        let run = eq.nodes[0].children[0];
        assert_eq!(eq.nodes[run].mult, 2);
        assert_eq!(eq.nodes[run].children.len(), 1);
        assert_eq!(eq.nodes[eq.nodes[run].children[0]].mult, 1);
    }
}
