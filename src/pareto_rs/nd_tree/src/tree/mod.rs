/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Pareto archive built on an ND-tree.
//!
//! The implementation is split into sub-modules by concern:
//! - [`update`]: dominance filtering and pruning (reject, replace, collapse)
//! - [`insert`]: write path (add, descend, expand, split)
//! - [`find`]: read-only dominance and membership queries
//! - [`invariants`]: structural checks used by tests

mod find;
mod insert;
mod invariants;
mod update;

use crate::arena::{NodeArena, NodeIndex};
use crate::{NdTreeConfig, NdTreeError, NdTreeNode, Point};

/// Result of adding a point to the archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddResult {
    /// Whether the point was stored. A point weakly dominated by a stored
    /// point (including an exact duplicate) is rejected.
    pub accepted: bool,
    /// How many stored points the new point dominated and evicted.
    pub num_points_removed: usize,
    /// Whether the tree structure changed (splits, collapses, removed or
    /// replaced nodes). When true, the archive's `revision_id` is incremented.
    pub changed: bool,
}

/// An archive of mutually non-dominated points.
///
/// Points are clustered in an ND-tree: every node carries the bounding
/// rectangle of its subtree, so that most of the tree can be skipped when
/// checking a new point for dominance.
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`] and refer to their parent and
/// children by [`NodeIndex`]. Operations that replace a node (collapsing a
/// node with a single child, discarding a dominated subtree) hand back the
/// replacement's index rather than keeping the old one alive.
///
/// # Concurrency
///
/// Every mutation takes `&mut self`. Callers sharing an archive between
/// threads must hold an exclusive lock for the duration of each [`add`](Self::add).
#[derive(Debug)]
pub struct ParetoArchive {
    /// The root node index, `None` while the archive is empty.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena,
    config: NdTreeConfig,
    /// Fixed by the first point ever added (until [`Self::clear`]).
    dimension: Option<usize>,
    /// Number of points stored in the tree.
    num_points: usize,
    /// Incremented when the tree structure changes.
    revision_id: u32,
}

impl ParetoArchive {
    /// Create an empty archive.
    pub const fn new(config: NdTreeConfig) -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
            config,
            dimension: None,
            num_points: 0,
            revision_id: 0,
        }
    }

    /// Create an empty archive, validating the tuning parameters.
    pub fn with_params(max_leaf_points: usize, split_children: usize) -> Result<Self, NdTreeError> {
        let config = NdTreeConfig::new(max_leaf_points, split_children)?;
        Ok(Self::new(config))
    }

    /// The archive's tuning parameters.
    pub const fn config(&self) -> NdTreeConfig {
        self.config
    }

    /// Number of stored points.
    pub const fn len(&self) -> usize {
        self.num_points
    }

    /// Returns true if no point is stored.
    pub const fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// Dimensionality of stored points, once the first point has been added.
    pub const fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Get the revision ID of the tree.
    pub const fn revision_id(&self) -> u32 {
        self.revision_id
    }

    /// Get the root node index, `None` while the archive is empty.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Get a reference to the root node.
    pub fn root(&self) -> Option<&NdTreeNode> {
        self.root.map(|idx| &self.nodes[idx])
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a node of this archive.
    pub fn node(&self, idx: NodeIndex) -> &NdTreeNode {
        &self.nodes[idx]
    }

    /// Number of nodes in the tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves in the tree.
    pub fn num_leaves(&self) -> usize {
        self.iter().filter(|node| node.is_leaf()).count()
    }

    /// Returns an iterator over all nodes in the tree (depth-first traversal).
    pub fn iter(&self) -> crate::PreOrderDfsIterator<'_> {
        crate::PreOrderDfsIterator::new(self)
    }

    /// Returns an iterator over every stored point. No order is guaranteed.
    pub fn points(&self) -> crate::Points<'_> {
        crate::Points::new(self)
    }

    /// Snapshot of every stored point, each exactly once, in no particular order.
    ///
    /// Returns an empty vector for an empty archive.
    pub fn export_points(&self) -> Vec<Point> {
        self.points().cloned().collect()
    }

    /// Drop every point and forget the dimensionality.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.dimension = None;
        self.num_points = 0;
        self.revision_id = self.revision_id.wrapping_add(1);
    }

    /// Fail if `point` does not match the archive's dimensionality.
    fn check_dimension(&self, point: &[f64]) -> Result<(), NdTreeError> {
        match self.dimension {
            Some(expected) if expected != point.len() => Err(NdTreeError::DimensionMismatch {
                expected,
                actual: point.len(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for ParetoArchive {
    fn default() -> Self {
        Self::new(NdTreeConfig::default())
    }
}
