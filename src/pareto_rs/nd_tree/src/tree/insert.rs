/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: adding, descending, expanding rectangles, and splitting.
//!
//! Adding a point first runs the dominance update. If the point survives it
//! descends to the leaf whose rectangle midpoint is nearest, is appended
//! there, and the leaf is split once it holds too many points.

use tracing::{debug, trace};

use super::update::UpdateOutcome;
use super::{AddResult, ParetoArchive};
use crate::arena::{NodeArena, NodeIndex};
use crate::node::NodePayload;
use crate::point::euclidean_distance;
use crate::{NdTreeConfig, NdTreeError, NdTreeNode, Point, Rectangle};

impl ParetoArchive {
    /// Offer a point to the archive.
    ///
    /// The point is rejected if a stored point weakly dominates it (an exact
    /// duplicate included); otherwise it is stored and every stored point it
    /// dominates is evicted. Rejection leaves the archive untouched.
    ///
    /// # Errors
    ///
    /// Returns [`NdTreeError::DimensionMismatch`] if the point's length differs
    /// from the first point ever added. The archive is unchanged.
    pub fn add(&mut self, point: impl Into<Point>) -> Result<AddResult, NdTreeError> {
        let point = point.into();
        self.check_dimension(&point)?;
        debug_assert!(
            point.iter().all(|c| !c.is_nan()),
            "NaN coordinates have no dominance order"
        );

        #[cfg(feature = "unittest")]
        let (num_points_before, revision_id_before) = (self.num_points, self.revision_id);

        let result = self.add_point(point);

        #[cfg(feature = "unittest")]
        {
            self.check_delta_invariants(num_points_before, revision_id_before, &result);
            self.check_tree_invariants();
        }
        Ok(result)
    }

    /// Add every point in order, stopping at the first error.
    ///
    /// Returns how many points were accepted. Points added before an error
    /// stay in the archive.
    pub fn try_extend<I>(&mut self, points: I) -> Result<usize, NdTreeError>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut accepted = 0;
        for point in points {
            if self.add(point)?.accepted {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    fn add_point(&mut self, point: Point) -> AddResult {
        let mut rv = AddResult::default();

        let target = match self.root {
            None => {
                self.dimension = Some(point.dimension());
                rv.changed = true;
                self.nodes.insert(NdTreeNode::leaf(None))
            }
            Some(root) => match Self::update_node(&mut self.nodes, root, &point, &mut rv) {
                UpdateOutcome::Rejected => {
                    trace!(point = ?point.coords(), "rejected dominated point");
                    self.apply(&rv);
                    return rv;
                }
                UpdateOutcome::Accepted(survivor) => survivor.index(),
            },
        };

        self.root = Some(target);
        Self::insert_point(&mut self.nodes, target, point, self.config, &mut rv);
        rv.accepted = true;
        self.apply(&rv);

        trace!(
            removed = rv.num_points_removed,
            changed = rv.changed,
            len = self.num_points,
            "accepted point"
        );
        rv
    }

    /// Fold an [`AddResult`] into the archive's counters.
    fn apply(&mut self, rv: &AddResult) {
        self.num_points -= rv.num_points_removed;
        if rv.accepted {
            self.num_points += 1;
        }
        if rv.changed {
            self.revision_id = self.revision_id.wrapping_add(1);
        }
    }

    /// Insert a point that survived the dominance update.
    ///
    /// Descends from `node_idx` into the child with the nearest rectangle
    /// midpoint until a leaf is reached, appends the point there, widens the
    /// rectangles on the way back up and splits the leaf if it overflows.
    fn insert_point(
        nodes: &mut NodeArena,
        node_idx: NodeIndex,
        point: Point,
        config: NdTreeConfig,
        rv: &mut AddResult,
    ) {
        let mut leaf_idx = node_idx;
        while let NodePayload::Internal(children) = &nodes[leaf_idx].payload {
            leaf_idx = Self::nearest_child(nodes, children, &point);
        }

        Self::expand(nodes, leaf_idx, &point);
        let len = nodes[leaf_idx].push_point(point);
        if len > config.max_leaf_points() {
            Self::split_node(nodes, leaf_idx, config.split_children());
            rv.changed = true;
        }
    }

    /// The child whose rectangle midpoint is nearest to `point`.
    ///
    /// Ties go to the child that comes first.
    fn nearest_child(nodes: &NodeArena, children: &[NodeIndex], point: &[f64]) -> NodeIndex {
        let distance = |idx: &NodeIndex| {
            nodes[*idx]
                .bounds()
                .map_or(f64::INFINITY, |bounds| bounds.distance_to_midpoint(point))
        };
        *children
            .iter()
            .min_by(|a, b| distance(a).total_cmp(&distance(b)))
            .expect("internal node must have children")
    }

    /// Widen the rectangle of `node_idx` to contain `point`, then its
    /// ancestors' as long as they grow too.
    fn expand(nodes: &mut NodeArena, node_idx: NodeIndex, point: &[f64]) {
        let mut current = Some(node_idx);
        while let Some(idx) = current {
            let node = &mut nodes[idx];
            let widened = match &mut node.bounds {
                Some(bounds) => bounds.expand(point),
                None => {
                    node.bounds = Some(Rectangle::from_point(point));
                    true
                }
            };
            if !widened {
                break;
            }
            current = node.parent;
        }
    }

    /// Split an overflowing leaf into an internal node.
    ///
    /// # Algorithm
    ///
    /// 1. Up to `split_children` times, take the point with the largest mean
    ///    distance to the other remaining points and seed a new child with it.
    /// 2. Hand every remaining point, in order, to the child with the nearest
    ///    rectangle midpoint, widening that child's rectangle immediately.
    ///    Later assignments therefore see earlier ones: the partition is a
    ///    greedy heuristic, not an optimal one.
    /// 3. The leaf becomes an internal node owning the new children.
    ///
    /// An overflowing leaf holds at least two points, so at least two
    /// children are seeded. No child receives more than the leaf capacity.
    fn split_node(nodes: &mut NodeArena, node_idx: NodeIndex, split_children: usize) {
        let NodePayload::Leaf(points) = &mut nodes[node_idx].payload else {
            unreachable!("only leaves are split");
        };
        let mut points = std::mem::take(points);

        let mut children = Vec::with_capacity(split_children);
        while children.len() < split_children {
            let Some(pos) = Self::farthest_point(&points) else {
                break;
            };
            let seed = points.remove(pos);
            let mut child = NdTreeNode::leaf(Some(node_idx));
            child.bounds = Some(Rectangle::from_point(&seed));
            child.push_point(seed);
            children.push(nodes.insert(child));
        }

        for point in points {
            let target = Self::nearest_child(nodes, &children, &point);
            Self::expand(nodes, target, &point);
            nodes[target].push_point(point);
        }

        debug!(node = ?node_idx, children = children.len(), "split leaf");
        nodes[node_idx].payload = NodePayload::Internal(children);
    }

    /// Index of the point with the largest mean distance to the others.
    ///
    /// Ties go to the point that comes first. Returns `None` for an empty
    /// slice.
    fn farthest_point(points: &[Point]) -> Option<usize> {
        match points.len() {
            0 => None,
            1 => Some(0),
            n => {
                let others = (n - 1) as f64;
                let mut farthest = 0;
                let mut max_mean = f64::NEG_INFINITY;
                for (i, candidate) in points.iter().enumerate() {
                    let mean = points
                        .iter()
                        .map(|other| euclidean_distance(candidate, other))
                        .sum::<f64>()
                        / others;
                    if mean > max_mean {
                        max_mean = mean;
                        farthest = i;
                    }
                }
                Some(farthest)
            }
        }
    }
}
