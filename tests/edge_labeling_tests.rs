//! Integration tests for edge-mode labeling enumeration

mod common;

use common::{collect, count};

#[test]
fn test_single_vertex_has_no_edges() {
    // one labeling of the empty edge set
    assert_eq!(collect(&[0], 2, true), vec![Vec::<u32>::new()]);
}

#[test]
fn test_single_edge() {
    assert_eq!(collect(&[0, 1], 2, true), vec![vec![0], vec![1]]);
    assert_eq!(
        collect(&[0, 1], 3, true),
        vec![vec![0], vec![1], vec![2]]
    );
}

#[test]
fn test_path_of_three_edges_are_automorphic() {
    assert_eq!(
        collect(&[0, 1, 2], 2, true),
        vec![vec![0, 0], vec![1, 0], vec![1, 1]]
    );
}

#[test]
fn test_star_edges() {
    // three automorphic edges: one labeling per multiset
    assert_eq!(count(&[0, 1, 1, 1], 2, true), 4);
    assert_eq!(count(&[0, 1, 1, 1], 3, true), 10);
}

#[test]
fn test_path_of_four_edges() {
    // reflection swaps the outer edges and fixes the middle one
    assert_eq!(count(&[0, 1, 1, 2], 2, true), 6);
}

#[test]
fn test_vector_length_matches_edge_count() {
    for labeling in collect(&[0, 1, 2, 1, 1], 2, true) {
        assert_eq!(labeling.len(), 4);
    }
}

#[test]
fn test_edge_mode_is_idempotent() {
    let first = collect(&[0, 1, 1, 2], 3, true);
    let second = collect(&[0, 1, 1, 2], 3, true);
    assert_eq!(first, second);
}
