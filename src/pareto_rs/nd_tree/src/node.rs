/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! NdTreeNode - A node in the ND-tree.

use crate::arena::NodeIndex;
use crate::{Point, Rectangle};

/// What a node stores: points (a leaf) or child handles (an internal node).
#[derive(Debug, Clone)]
pub enum NodePayload {
    /// A cluster of mutually non-dominated points.
    Leaf(Vec<Point>),
    /// At least two children once the tree is at rest.
    Internal(Vec<NodeIndex>),
}

/// A node in the ND-tree.
///
/// Every node knows its parent so that rectangle growth can be propagated
/// upwards and a collapsing node can be replaced in its parent's child list.
#[derive(Debug, Clone)]
pub struct NdTreeNode {
    /// The parent node, `None` for the root.
    pub(crate) parent: Option<NodeIndex>,
    /// Bounds of every point in the subtree, `None` while the subtree is empty.
    pub(crate) bounds: Option<Rectangle>,
    pub(crate) payload: NodePayload,
}

impl NdTreeNode {
    /// Create an empty leaf.
    pub(crate) const fn leaf(parent: Option<NodeIndex>) -> Self {
        Self {
            parent,
            bounds: None,
            payload: NodePayload::Leaf(Vec::new()),
        }
    }

    /// The parent handle, `None` for the root.
    pub const fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// The node's local bounding rectangle.
    pub const fn bounds(&self) -> Option<&Rectangle> {
        self.bounds.as_ref()
    }

    /// The node's payload.
    pub const fn payload(&self) -> &NodePayload {
        &self.payload
    }

    /// Returns true if the node has no children.
    pub const fn is_leaf(&self) -> bool {
        matches!(self.payload, NodePayload::Leaf(_))
    }

    /// Returns true if the node holds neither points nor children.
    pub fn is_empty(&self) -> bool {
        match &self.payload {
            NodePayload::Leaf(points) => points.is_empty(),
            NodePayload::Internal(children) => children.is_empty(),
        }
    }

    /// Points stored directly in this node. Empty for internal nodes.
    pub fn points(&self) -> &[Point] {
        match &self.payload {
            NodePayload::Leaf(points) => points,
            NodePayload::Internal(_) => &[],
        }
    }

    /// Child handles. Empty for leaves.
    pub fn children(&self) -> &[NodeIndex] {
        match &self.payload {
            NodePayload::Leaf(_) => &[],
            NodePayload::Internal(children) => children,
        }
    }

    /// Append a point to a leaf, returning the new number of points.
    ///
    /// # Panics
    ///
    /// Panics if the node is internal.
    pub(crate) fn push_point(&mut self, point: Point) -> usize {
        let NodePayload::Leaf(points) = &mut self.payload else {
            panic!("points can only be appended to a leaf");
        };
        points.push(point);
        points.len()
    }

    /// Remove `child` from the child list. No-op if it isn't there.
    pub(crate) fn remove_child(&mut self, child: NodeIndex) {
        if let NodePayload::Internal(children) = &mut self.payload {
            children.retain(|&c| c != child);
        }
    }

    /// Put `new` in the slot currently held by `old`.
    pub(crate) fn replace_child(&mut self, old: NodeIndex, new: NodeIndex) {
        if let NodePayload::Internal(children) = &mut self.payload
            && let Some(slot) = children.iter_mut().find(|c| **c == old)
        {
            *slot = new;
        }
    }

    /// Turn the node into an empty leaf and forget its bounds.
    pub(crate) fn reset(&mut self) {
        self.payload = NodePayload::Leaf(Vec::new());
        self.bounds = None;
    }
}
