/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterators over the nodes and points of a [`ParetoArchive`].

use std::slice;

use crate::arena::NodeIndex;
use crate::{NdTreeNode, ParetoArchive, Point};

/// An iterator that performs a depth-first traversal of the ND-tree.
///
/// Nodes are visited in pre-order (parent before children), children in the
/// order of their parent's child list. The traversal uses an explicit stack.
#[derive(Debug)]
pub struct PreOrderDfsIterator<'a> {
    archive: &'a ParetoArchive,
    /// Nodes still to visit, pushed in reverse so the first child pops first.
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderDfsIterator<'a> {
    /// Create a new iterator starting from the root of the archive.
    pub fn new(archive: &'a ParetoArchive) -> Self {
        Self {
            archive,
            stack: archive.root_index().into_iter().collect(),
        }
    }

    /// Create a new iterator starting from the given node.
    pub fn from_node(archive: &'a ParetoArchive, node_idx: NodeIndex) -> Self {
        Self {
            archive,
            stack: vec![node_idx],
        }
    }
}

impl<'a> Iterator for PreOrderDfsIterator<'a> {
    type Item = &'a NdTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.stack.pop()?;
        let node = self.archive.node(node_idx);
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a ParetoArchive {
    type Item = &'a NdTreeNode;
    type IntoIter = PreOrderDfsIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        PreOrderDfsIterator::new(self)
    }
}

/// Iterator over every point stored in a [`ParetoArchive`], leaf by leaf.
#[derive(Debug)]
pub struct Points<'a> {
    nodes: PreOrderDfsIterator<'a>,
    current: slice::Iter<'a, Point>,
}

impl<'a> Points<'a> {
    pub(crate) fn new(archive: &'a ParetoArchive) -> Self {
        Self {
            nodes: PreOrderDfsIterator::new(archive),
            current: Default::default(),
        }
    }
}

impl<'a> Iterator for Points<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.current.next() {
                return Some(point);
            }
            self.current = self.nodes.next()?.points().iter();
        }
    }
}
