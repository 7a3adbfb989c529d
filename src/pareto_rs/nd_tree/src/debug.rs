/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Introspection for diagnosing the shape of an archive's tree.

use std::fmt;

use crate::ParetoArchive;
use crate::arena::NodeIndex;

/// Shape and size of an archive's tree at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub num_points: usize,
    pub num_nodes: usize,
    pub num_leaves: usize,
    /// Number of edges on the longest root-to-leaf path; 0 for a single leaf.
    pub depth: usize,
    pub revision_id: u32,
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "numPoints={} numNodes={} numLeaves={} depth={} revisionId={}",
            self.num_points, self.num_nodes, self.num_leaves, self.depth, self.revision_id
        )
    }
}

impl ParetoArchive {
    /// Summarize the tree.
    pub fn summary(&self) -> TreeSummary {
        TreeSummary {
            num_points: self.len(),
            num_nodes: self.num_nodes(),
            num_leaves: self.num_leaves(),
            depth: self.root_index().map_or(0, |root| self.depth_below(root)),
            revision_id: self.revision_id(),
        }
    }

    fn depth_below(&self, node_idx: NodeIndex) -> usize {
        self.node(node_idx)
            .children()
            .iter()
            .map(|&child| self.depth_below(child) + 1)
            .max()
            .unwrap_or(0)
    }
}
