//! Common test utilities

use salix::enumerate_labelings;

/// Collect every labeling of the given tree.
pub fn collect(sequence: &[u32], max_label: u32, edges: bool) -> Vec<Vec<u32>> {
    enumerate_labelings(sequence, max_label, edges)
        .expect("valid input")
        .collect()
}

/// Count the labelings of the given tree.
pub fn count(sequence: &[u32], max_label: u32, edges: bool) -> usize {
    collect(sequence, max_label, edges).len()
}
