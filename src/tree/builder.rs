//! Arena tree construction, canonical sorting, symmetry detection

use std::collections::VecDeque;

use crate::sequence::Entry;

/// Recursive shape signature of a subtree: the node's child count followed by
/// its children's shapes in canonical order.
///
/// The derived `Ord` compares the arity first and the child shapes
/// lexicographically after, which is exactly the order the canonical sorter
/// needs: two subtrees are isomorphic iff their shapes are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShapeVec {
    arity: usize,
    children: Vec<ShapeVec>,
}

/// One vertex of the rooted working tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) depth: u32,
    pub(crate) label: u32,
    pub(crate) labeled: bool,
    pub(crate) shape: ShapeVec,
}

impl Node {
    fn new(parent: Option<usize>, depth: u32, labeled: bool) -> Self {
        Node {
            parent,
            children: Vec::new(),
            depth,
            label: 0,
            labeled,
            shape: ShapeVec::default(),
        }
    }
}

/// The rooted working tree, stored as an arena of nodes addressed by stable
/// indices. Arena order follows the balanced pre-order list, so ascending
/// index order is the output order for labelings.
///
/// A symmetric bicentral tree additionally holds a synthetic root in a
/// reserved slot at the end of the arena; `super_root` doubles as the
/// symmetry flag.
#[derive(Debug)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: usize,
    pub(crate) super_root: Option<usize>,
}

impl Tree {
    /// Build the rooted tree from a balanced pre-order list.
    ///
    /// Walks the list left to right with a current-parent cursor, climbing
    /// the parent chain until a strictly shallower node is found; each entry
    /// is appended to that node's children in appearance order.
    pub fn build(entries: &[Entry]) -> Tree {
        let mut nodes = vec![Node::new(None, 0, entries[0].labeled)];
        let mut pnode = 0;
        for entry in &entries[1..] {
            while nodes[pnode].depth >= entry.depth {
                match nodes[pnode].parent {
                    Some(p) => pnode = p,
                    None => break,
                }
            }
            let id = nodes.len();
            nodes.push(Node::new(Some(pnode), entry.depth, entry.labeled));
            nodes[pnode].children.push(id);
            pnode = id;
        }
        Tree {
            nodes,
            root: 0,
            super_root: None,
        }
    }

    /// Sort the whole tree into canonical form.
    pub fn canonicalize(&mut self) {
        self.sort_subtree(self.root);
    }

    /// Bottom-up canonical sort: computes each node's shape and orders
    /// children ascending by shape, so isomorphic subtrees end up adjacent.
    fn sort_subtree(&mut self, n: usize) {
        for i in 0..self.nodes[n].children.len() {
            let child = self.nodes[n].children[i];
            self.sort_subtree(child);
        }

        let mut children = std::mem::take(&mut self.nodes[n].children);
        if children.len() > 1 {
            children.sort_by(|&a, &b| self.nodes[a].shape.cmp(&self.nodes[b].shape));
        }
        let shape = ShapeVec {
            arity: children.len(),
            children: children
                .iter()
                .map(|&c| self.nodes[c].shape.clone())
                .collect(),
        };
        self.nodes[n].children = children;
        self.nodes[n].shape = shape;
    }

    /// Whether a bicentral tree is symmetric across its two centers.
    ///
    /// After balancing, node 0 is the root center and node 1 its partner.
    /// Runs a lock-step breadth-first traversal from the two centers' child
    /// lists (the inter-center edge excluded); the tree is symmetric iff the
    /// two frontiers hold the same count at every step and exhaust
    /// simultaneously. Requires the tree to be canonically sorted.
    pub fn is_symmetric(&self) -> bool {
        if self.nodes.len() == 1 {
            return false;
        }

        let mut q1: VecDeque<usize> = self.nodes[0]
            .children
            .iter()
            .copied()
            .filter(|&c| c != 1)
            .collect();
        let mut q2: VecDeque<usize> = self.nodes[1].children.iter().copied().collect();

        while q1.len() == q2.len() {
            match (q1.pop_front(), q2.pop_front()) {
                (Some(c1), Some(c2)) => {
                    q1.extend(self.nodes[c1].children.iter().copied());
                    q2.extend(self.nodes[c2].children.iter().copied());
                }
                _ => return true,
            }
        }
        false
    }

    /// Install the synthetic root of a symmetric bicentral tree.
    ///
    /// The synthetic root takes a reserved slot at the end of the arena and
    /// owns the two centers as its children; the edge between them is
    /// removed and the tree re-sorted under the new root.
    pub fn add_symmetric_root(&mut self) {
        let id = self.nodes.len();
        let mut root = Node::new(None, 0, true);
        root.children = vec![0, 1];
        self.nodes.push(root);

        self.nodes[0].parent = Some(id);
        self.nodes[1].parent = Some(id);
        self.nodes[0].children.retain(|&c| c != 1);

        self.root = id;
        self.super_root = Some(id);
        self.canonicalize();
    }

    /// Reset every node's label to 0.
    pub fn reset_labels(&mut self) {
        for node in &mut self.nodes {
            node.label = 0;
        }
    }
}
