//! Pre-order sequence handling: validation, center finding, balancing

use crate::LabelingError;

/// One position of the working pre-order list.
///
/// `labeled` marks nodes that carry a label during enumeration: every node in
/// vertex mode, only the synthetic edge nodes in edge mode. The flag rides
/// along through balancing so the pipeline never needs to track original
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub depth: u32,
    pub labeled: bool,
}

impl Entry {
    fn rebased(self, distance: u32) -> Entry {
        Entry {
            depth: self.depth - distance,
            labeled: self.labeled,
        }
    }
}

/// Check that `sequence` is a well-formed pre-order depth sequence.
///
/// It must be non-empty, start at depth 0, never return to depth 0, and never
/// increase by more than one between consecutive elements.
pub fn validate(sequence: &[u32]) -> Result<(), LabelingError> {
    if sequence.is_empty() {
        return Err(LabelingError::InvalidTreeDescription(
            "sequence must be non-empty".to_string(),
        ));
    }
    if sequence[0] != 0 {
        return Err(LabelingError::InvalidTreeDescription(format!(
            "sequence must start at depth 0, got {}",
            sequence[0]
        )));
    }
    for (i, pair) in sequence.windows(2).enumerate() {
        if pair[1] > pair[0] + 1 {
            return Err(LabelingError::InvalidTreeDescription(format!(
                "depth jumps from {} to {} at position {}",
                pair[0],
                pair[1],
                i + 1
            )));
        }
        if pair[1] == 0 {
            return Err(LabelingError::InvalidTreeDescription(format!(
                "depth 0 reappears at position {}",
                i + 1
            )));
        }
    }
    Ok(())
}

/// Working list for vertex labeling: every node carries a label.
pub fn vertex_entries(sequence: &[u32]) -> Vec<Entry> {
    sequence
        .iter()
        .map(|&depth| Entry {
            depth,
            labeled: true,
        })
        .collect()
}

/// Working list for edge labeling.
///
/// Each edge is subdivided with one synthetic degree-2 node: a vertex at
/// depth `d` becomes a synthetic node at `2d - 1` followed by the vertex at
/// `2d`. Only the synthetic nodes carry labels; the original vertices stay
/// frozen at label 0 during enumeration.
pub fn edge_entries(sequence: &[u32]) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(sequence.len() * 2);
    for &depth in sequence {
        if depth == 0 {
            entries.push(Entry {
                depth: 0,
                labeled: false,
            });
        } else {
            entries.push(Entry {
                depth: 2 * depth - 1,
                labeled: true,
            });
            entries.push(Entry {
                depth: 2 * depth,
                labeled: false,
            });
        }
    }
    entries
}

/// Find the center(s) of the tree by repeated leaf peeling on the flat list.
///
/// Each round strips every position with no strictly deeper successor (the
/// current leaves) and then the working root if it has fewer than two
/// children left. The 1 or 2 surviving positions are the centers, returned
/// as `(depth, original index)` pairs in index order.
pub fn find_centers(entries: &[Entry]) -> Vec<(u32, usize)> {
    let mut nodes: Vec<(u32, usize)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.depth, i))
        .collect();

    while nodes.len() > 2 {
        let root_child_depth = nodes[0].0 + 1;
        let mut root_children = 0;
        let mut i = 0;
        while i < nodes.len() {
            if nodes[i].0 == root_child_depth {
                root_children += 1;
            }
            if i == nodes.len() - 1 || nodes[i + 1].0 <= nodes[i].0 {
                nodes.remove(i);
            } else {
                i += 1;
            }
        }
        // a root with a single remaining child is itself a leaf
        if root_children < 2 {
            nodes.remove(0);
        }
    }

    nodes
}

/// The maximal branch rooted at `start`: returns `(start, end)` with the
/// branch occupying `start..end`.
fn find_branch(entries: &[Entry], start: usize) -> (usize, usize) {
    let mut i = start + 1;
    while i < entries.len() && entries[i].depth > entries[start].depth {
        i += 1;
    }
    (start, i)
}

/// The parent of the node at depth `depth`, scanning backwards from `from`.
fn find_parent(entries: &[Entry], from: usize, depth: u32) -> Option<usize> {
    (0..=from).rev().find(|&i| entries[i].depth < depth)
}

/// Re-root the pre-order list at the tree's center.
///
///// Single center at position 0: the list is already balanced. Otherwise the
/// center's branch (depths rebased) opens the balanced list; with two centers
/// the lower-indexed one becomes the root and its partner's branch comes
/// first. Branches appearing after the center's branch are spliced in next to
/// their ancestor parents, then the ancestor chain is climbed toward the old
/// root, appending each ancestor's segment with depths corrected so the
/// ancestor sits at distance 1, 2, 3, … from the new root.
pub fn balance(mut lst: Vec<Entry>, centers: &[(u32, usize)]) -> Vec<Entry> {
    let (distance, center) = centers[0];
    if centers.len() == 1 && center == 0 {
        return lst;
    }

    let (pmi, mut mi) = find_branch(&lst, center);
    let mut balanced: Vec<Entry> = Vec::with_capacity(lst.len());
    if centers.len() == 1 {
        balanced.extend(lst[pmi..mi].iter().map(|e| e.rebased(distance)));
    } else {
        // The partner center's branch becomes the first subtree under the
        // new root; the root center's remaining children follow.
        let partner = centers[1].1;
        balanced.push(lst[center].rebased(distance));
        balanced.extend(lst[partner..mi].iter().map(|e| e.rebased(distance)));
        balanced.extend(lst[pmi + 1..partner].iter().map(|e| e.rebased(distance)));
    }

    // Relocate every branch that appears after the center's branch to sit
    // directly after its parent, which is always an ancestor of the center.
    let mut center = center;
    let mut parent_scan = center.saturating_sub(1);
    while mi < lst.len() {
        let (bpmi, bmi) = find_branch(&lst, mi);
        let Some(p) = find_parent(&lst, parent_scan, lst[bpmi].depth) else {
            break;
        };
        parent_scan = p;
        let mut rebuilt = Vec::with_capacity(lst.len() + (bmi - bpmi));
        rebuilt.extend_from_slice(&lst[..p + 1]);
        rebuilt.extend_from_slice(&lst[bpmi..bmi]);
        rebuilt.extend_from_slice(&lst[p + 1..]);
        lst = rebuilt;
        center += bmi - bpmi;
        mi = bmi + (bmi - bpmi);
    }

    // Climb from the center toward the old root, appending each ancestor's
    // segment at its distance from the new root.
    let mut parent_index = center;
    let mut parent_dist: i64 = 1;
    while parent_index > 0 {
        let child_index = parent_index;
        let Some(p) = find_parent(&lst, child_index - 1, lst[child_index].depth) else {
            break;
        };
        parent_index = p;
        let diff = lst[p].depth as i64 - parent_dist;
        for e in &lst[p..child_index] {
            balanced.push(Entry {
                depth: (e.depth as i64 - diff) as u32,
                labeled: e.labeled,
            });
        }
        parent_dist += 1;
    }

    balanced
}
