//! Canonical labeling generator for free trees.
//!
//! Enumerates, without duplication, all assignments of labels from the
//! alphabet `{0, …, max_label - 1}` to the vertices (or edges) of a free
//! tree, where two labelings count as the same whenever an automorphism of
//! the tree maps one onto the other.
//!
//! The tree is described by a pre-order depth sequence: a depth-first walk
//! recording each visited node's distance from the walk's root. The pipeline
//! re-roots the tree at its center, sorts it into a canonical form, contracts
//! automorphic sibling runs into an equivalence tree, and then advances a
//! backtracking odometer that yields exactly one labeling per automorphism
//! orbit.
//!
//! ```
//! let labelings: Vec<Vec<u32>> = salix::enumerate_labelings(&[0, 1], 2, false)
//!     .unwrap()
//!     .collect();
//! assert_eq!(labelings, vec![vec![0, 0], vec![1, 0], vec![1, 1]]);
//! ```

pub mod batch;
pub mod cli;
pub mod output;
pub mod sequence;
pub mod tree;

use thiserror::Error;

pub use tree::Labelings;

#[derive(Error, Debug)]
pub enum LabelingError {
    #[error("invalid tree description: {0}")]
    InvalidTreeDescription(String),

    #[error("invalid alphabet size: {0}")]
    InvalidAlphabetSize(String),
}

/// Enumerate all labelings of the free tree described by `sequence`.
///
/// `sequence` is a pre-order depth sequence (first element 0, each element at
/// most one greater than its predecessor). `max_label` is the alphabet size;
/// labels come from `0..max_label`. With `edge_mode` the tree's edges are
/// labeled instead of its vertices.
///
/// Returns a lazy iterator yielding one label vector per automorphism orbit,
/// in canonical order. Vectors are read off the balanced (center-rooted)
/// tree in ascending node order; [`Labelings::balanced`] exposes that
/// ordering.
///
/// Validation is total and happens before any enumeration work: a malformed
/// sequence fails with [`LabelingError::InvalidTreeDescription`], a zero
/// alphabet with [`LabelingError::InvalidAlphabetSize`].
pub fn enumerate_labelings(
    sequence: &[u32],
    max_label: u32,
    edge_mode: bool,
) -> Result<Labelings, LabelingError> {
    sequence::validate(sequence)?;
    if max_label == 0 {
        return Err(LabelingError::InvalidAlphabetSize(
            "alphabet size must be a positive integer".to_string(),
        ));
    }

    let entries = if edge_mode {
        sequence::edge_entries(sequence)
    } else {
        sequence::vertex_entries(sequence)
    };

    let centers = sequence::find_centers(&entries);
    let entries = sequence::balance(entries, &centers);

    let mut tree = tree::Tree::build(&entries);
    tree.canonicalize();

    // A symmetric bicentral tree gets a synthetic root over its two centers,
    // which halves the label space during enumeration.
    if centers.len() == 2 && tree.is_symmetric() {
        tree.add_symmetric_root();
    }

    let eq = tree::EqTree::build(&tree);
    tree.reset_labels();

    Ok(Labelings::new(tree, eq, max_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_sequence() {
        let err = enumerate_labelings(&[], 2, false).unwrap_err();
        assert!(matches!(err, LabelingError::InvalidTreeDescription(_)));
    }

    #[test]
    fn test_rejects_sequence_not_starting_at_zero() {
        let err = enumerate_labelings(&[42, 43], 2, false).unwrap_err();
        assert!(matches!(err, LabelingError::InvalidTreeDescription(_)));

        let err = enumerate_labelings(&[1, 2, 3], 2, false).unwrap_err();
        assert!(matches!(err, LabelingError::InvalidTreeDescription(_)));
    }

    #[test]
    fn test_rejects_depth_jump() {
        let err = enumerate_labelings(&[0, 2], 2, false).unwrap_err();
        assert!(matches!(err, LabelingError::InvalidTreeDescription(_)));
    }

    #[test]
    fn test_rejects_zero_alphabet() {
        let err = enumerate_labelings(&[0, 1, 2, 3], 0, false).unwrap_err();
        assert!(matches!(err, LabelingError::InvalidAlphabetSize(_)));
    }

    #[test]
    fn test_single_node() {
        let labelings: Vec<Vec<u32>> =
            enumerate_labelings(&[0], 2, false).unwrap().collect();
        assert_eq!(labelings, vec![vec![0], vec![1]]);
    }
}
