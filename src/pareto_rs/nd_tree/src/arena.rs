/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for ND-tree nodes.
//!
//! Nodes refer to their parent and children by [`NodeIndex`] instead of
//! pointers, so the parent/child cycle needs no shared ownership and removing
//! a node is a single slab removal.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::NdTreeNode;

/// Handle of a node in the arena.
///
/// Stable across mutations to other slots. Slots freed by a removal may be
/// reused by a later insertion, so a handle must not outlive its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// The raw slab key.
    pub const fn key(self) -> usize {
        self.0
    }
}

/// Arena storage for [`NdTreeNode`]s.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Slab<NdTreeNode>,
}

impl NodeArena {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a node, returning its handle.
    pub fn insert(&mut self, node: NdTreeNode) -> NodeIndex {
        NodeIndex(self.nodes.insert(node))
    }

    /// Remove a node, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the index is invalid.
    pub fn remove(&mut self, idx: NodeIndex) -> NdTreeNode {
        self.nodes.remove(idx.0)
    }

    /// Returns true if `idx` refers to a live node.
    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.nodes.contains(idx.0)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = NdTreeNode;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.0]
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.0]
    }
}
