/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Dominance update: the pruning pass that runs before every insertion.
//!
//! The update decides whether a candidate point is accepted, evicts the
//! stored points it dominates, and restructures the tree when nodes empty
//! out: empty children are dropped, single-child nodes collapse into their
//! child, and a subtree dominated as a whole is replaced by an empty node.

use tracing::debug;

use super::{AddResult, ParetoArchive};
use crate::arena::{NodeArena, NodeIndex};
use crate::node::NodePayload;
use crate::point::weakly_dominates;
use crate::{BoxRelation, NdTreeNode};

/// The node that stands in a subtree's place after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Survivor {
    /// The subtree root is still the same node.
    Unchanged(NodeIndex),
    /// The subtree root was replaced, either by its only remaining child or
    /// by a fresh empty node. The old index is no longer valid.
    Replaced(NodeIndex),
}

impl Survivor {
    pub(crate) const fn index(self) -> NodeIndex {
        match self {
            Self::Unchanged(idx) | Self::Replaced(idx) => idx,
        }
    }
}

/// Outcome of [`ParetoArchive::update_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateOutcome {
    /// A stored point weakly dominates the candidate.
    Rejected,
    /// The candidate may be inserted into the surviving node.
    Accepted(Survivor),
}

impl ParetoArchive {
    /// Filter `point` against the subtree rooted at `node_idx`.
    ///
    /// # Algorithm
    ///
    /// 1. **Nadir test**: if the nadir corner weakly dominates the point,
    ///    every stored point does too; reject.
    /// 2. **Ideal test**: if the point weakly dominates the ideal corner, it
    ///    dominates every stored point; discard the subtree and hand back a
    ///    new empty node.
    /// 3. **Incomparable**: if the point can neither dominate nor be dominated
    ///    by anything in the box, leave the subtree untouched.
    /// 4. Otherwise scan the leaf, or recurse into every child of an internal
    ///    node. A rejection anywhere rejects the whole update.
    ///
    /// Removed points are counted in `rv`, and `rv.changed` is set when the
    /// shape of the tree changes.
    pub(super) fn update_node(
        nodes: &mut NodeArena,
        node_idx: NodeIndex,
        point: &[f64],
        rv: &mut AddResult,
    ) -> UpdateOutcome {
        let Some(bounds) = nodes[node_idx].bounds() else {
            return UpdateOutcome::Accepted(Survivor::Unchanged(node_idx));
        };

        match bounds.relation(point) {
            BoxRelation::Dominated => UpdateOutcome::Rejected,
            BoxRelation::Dominates => {
                let replacement = Self::replace_subtree(nodes, node_idx, rv);
                UpdateOutcome::Accepted(Survivor::Replaced(replacement))
            }
            BoxRelation::Incomparable => UpdateOutcome::Accepted(Survivor::Unchanged(node_idx)),
            BoxRelation::Overlaps if nodes[node_idx].is_leaf() => {
                Self::update_leaf(&mut nodes[node_idx], node_idx, point, rv)
            }
            BoxRelation::Overlaps => Self::update_internal(nodes, node_idx, point, rv),
        }
    }

    /// Scan a leaf's points against the candidate.
    fn update_leaf(
        node: &mut NdTreeNode,
        node_idx: NodeIndex,
        point: &[f64],
        rv: &mut AddResult,
    ) -> UpdateOutcome {
        let NodePayload::Leaf(points) = &mut node.payload else {
            unreachable!("update_leaf called on an internal node");
        };

        if points.iter().any(|stored| weakly_dominates(stored, point)) {
            return UpdateOutcome::Rejected;
        }

        // Nothing stored is >= point, so `point` is never equal to a removed point.
        let before = points.len();
        points.retain(|stored| !weakly_dominates(point, stored));
        rv.num_points_removed += before - points.len();

        if points.is_empty() {
            node.bounds = None;
        }
        UpdateOutcome::Accepted(Survivor::Unchanged(node_idx))
    }

    /// Update every child of an internal node, then drop empty children and
    /// collapse the node if a single child remains.
    fn update_internal(
        nodes: &mut NodeArena,
        node_idx: NodeIndex,
        point: &[f64],
        rv: &mut AddResult,
    ) -> UpdateOutcome {
        // Collapsing children rewrite their slot in our child list, so walk a copy.
        let children = nodes[node_idx].children().to_vec();

        for child_idx in children {
            let survivor = match Self::update_node(nodes, child_idx, point, rv) {
                UpdateOutcome::Rejected => return UpdateOutcome::Rejected,
                UpdateOutcome::Accepted(survivor) => survivor.index(),
            };

            if nodes[survivor].is_empty() {
                nodes[node_idx].remove_child(survivor);
                nodes.remove(survivor);
                rv.changed = true;
            }
        }

        match nodes[node_idx].children() {
            [] => {
                // Every child was pruned. The parent drops us in turn; a root
                // stays behind as an empty leaf for the candidate.
                nodes[node_idx].reset();
                rv.changed = true;
                UpdateOutcome::Accepted(Survivor::Unchanged(node_idx))
            }
            &[only_child] => {
                Self::collapse(nodes, node_idx, only_child);
                rv.changed = true;
                UpdateOutcome::Accepted(Survivor::Replaced(only_child))
            }
            _ => UpdateOutcome::Accepted(Survivor::Unchanged(node_idx)),
        }
    }

    /// Replace `node_idx` by its only child, in the parent's child list or as
    /// the root.
    fn collapse(nodes: &mut NodeArena, node_idx: NodeIndex, child_idx: NodeIndex) {
        let parent = nodes[node_idx].parent;
        if let Some(parent_idx) = parent {
            nodes[parent_idx].replace_child(node_idx, child_idx);
        }
        nodes[child_idx].parent = parent;
        nodes.remove(node_idx);
        debug!(node = ?node_idx, child = ?child_idx, "collapsed single-child node");
    }

    /// Detach and free a subtree dominated by the candidate, returning a new,
    /// detached, empty node to stand in its place.
    fn replace_subtree(nodes: &mut NodeArena, node_idx: NodeIndex, rv: &mut AddResult) -> NodeIndex {
        if let Some(parent_idx) = nodes[node_idx].parent {
            nodes[parent_idx].remove_child(node_idx);
        }

        let removed = Self::free_subtree(nodes, node_idx);
        rv.num_points_removed += removed;
        rv.changed = true;
        debug!(node = ?node_idx, removed, "discarded dominated subtree");

        nodes.insert(NdTreeNode::leaf(None))
    }

    /// Remove a subtree from the arena, returning how many points it held.
    fn free_subtree(nodes: &mut NodeArena, node_idx: NodeIndex) -> usize {
        let mut removed = 0;
        let mut stack = vec![node_idx];
        while let Some(idx) = stack.pop() {
            match nodes.remove(idx).payload {
                NodePayload::Leaf(points) => removed += points.len(),
                NodePayload::Internal(children) => stack.extend(children),
            }
        }
        removed
    }
}
