/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Invariant checks for the ND-tree.
//!
//! With the `unittest` feature these run after every `add` to catch
//! structural violations early. Tests may also call
//! [`ParetoArchive::check_tree_invariants`] directly.

use super::ParetoArchive;
#[cfg(feature = "unittest")]
use super::AddResult;
use crate::arena::NodeIndex;
use crate::point::weakly_dominates;
use crate::{NodePayload, Point};

/// Totals gathered while walking a subtree.
#[derive(Debug, Default)]
struct SubtreeTotals {
    num_nodes: usize,
    num_points: usize,
}

impl ParetoArchive {
    /// Verify that the counters moved by exactly what `result` reports.
    #[cfg(feature = "unittest")]
    pub(crate) fn check_delta_invariants(
        &self,
        num_points_before: usize,
        revision_id_before: u32,
        result: &AddResult,
    ) {
        let expected_points = num_points_before - result.num_points_removed + usize::from(result.accepted);
        assert_eq!(
            expected_points, self.num_points,
            "num_points mismatch: before={num_points_before}, removed={}, accepted={}, after={}",
            result.num_points_removed, result.accepted, self.num_points,
        );

        let expected_revision_id = if result.changed {
            revision_id_before.wrapping_add(1)
        } else {
            revision_id_before
        };
        assert_eq!(
            expected_revision_id, self.revision_id,
            "revision_id mismatch: before={revision_id_before}, changed={}, after={}",
            result.changed, self.revision_id,
        );

        if !result.accepted {
            assert_eq!(
                result.num_points_removed, 0,
                "a rejected point must not evict anything"
            );
        }
    }

    /// Verify all structural invariants of the tree.
    ///
    /// Checks parent links, rectangle containment, leaf capacity, the
    /// branching factor, the memoized point count, that no node leaked from
    /// the arena, and that no stored point weakly dominates another.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message if any invariant is violated.
    pub fn check_tree_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.nodes.len(), 0, "empty archive still owns nodes");
            assert_eq!(self.num_points, 0, "empty archive reports points");
            return;
        };

        assert!(self.nodes.contains(root), "root {root:?} is not in the arena");
        assert_eq!(self.node(root).parent(), None, "root {root:?} has a parent");

        let totals = self.check_node_invariants(root);
        assert_eq!(
            totals.num_nodes,
            self.nodes.len(),
            "arena holds {} nodes but only {} are reachable",
            self.nodes.len(),
            totals.num_nodes,
        );
        assert_eq!(
            totals.num_points, self.num_points,
            "num_points: memoized={}, computed={}",
            self.num_points, totals.num_points,
        );

        self.check_non_domination();
    }

    /// Recursively check the subtree rooted at `node_idx`.
    fn check_node_invariants(&self, node_idx: NodeIndex) -> SubtreeTotals {
        let node = self.node(node_idx);
        let bounds = node
            .bounds()
            .unwrap_or_else(|| panic!("node {node_idx:?} has no rectangle"));
        let mut totals = SubtreeTotals {
            num_nodes: 1,
            num_points: 0,
        };

        match node.payload() {
            NodePayload::Leaf(points) => {
                assert!(!points.is_empty(), "leaf {node_idx:?} is empty");
                assert!(
                    points.len() <= self.config.max_leaf_points(),
                    "leaf {node_idx:?} holds {} points, capacity is {}",
                    points.len(),
                    self.config.max_leaf_points(),
                );
                for point in points {
                    assert_eq!(
                        Some(point.dimension()),
                        self.dimension,
                        "point {point:?} in leaf {node_idx:?} has the wrong dimension",
                    );
                    assert!(
                        bounds.contains(point),
                        "point {point:?} lies outside the rectangle of leaf {node_idx:?}: {bounds:?}",
                    );
                }
                totals.num_points = points.len();
            }
            NodePayload::Internal(children) => {
                assert!(
                    children.len() >= 2,
                    "internal node {node_idx:?} has {} children",
                    children.len(),
                );
                for &child_idx in children {
                    assert!(
                        self.nodes.contains(child_idx),
                        "child {child_idx:?} of {node_idx:?} is not in the arena",
                    );
                    let child = self.node(child_idx);
                    assert_eq!(
                        child.parent(),
                        Some(node_idx),
                        "child {child_idx:?} does not point back to {node_idx:?}",
                    );
                    if let Some(child_bounds) = child.bounds() {
                        assert!(
                            bounds.contains_rectangle(child_bounds),
                            "rectangle of {child_idx:?} ({child_bounds:?}) escapes its parent {node_idx:?} ({bounds:?})",
                        );
                    }
                    let child_totals = self.check_node_invariants(child_idx);
                    totals.num_nodes += child_totals.num_nodes;
                    totals.num_points += child_totals.num_points;
                }
            }
        }
        totals
    }

    /// Assert that no stored point weakly dominates another.
    fn check_non_domination(&self) {
        let points: Vec<&Point> = self.points().collect();
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                assert!(
                    !weakly_dominates(a, b) && !weakly_dominates(b, a),
                    "stored points {a:?} and {b:?} are not mutually non-dominated",
                );
            }
        }
    }
}
