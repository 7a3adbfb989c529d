/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: dominance and membership queries that never modify the tree.

use super::ParetoArchive;
use crate::NdTreeError;
use crate::point::weakly_dominates;

impl ParetoArchive {
    /// Returns true if some stored point weakly dominates `point`, i.e. if
    /// [`add`](Self::add) would reject it.
    ///
    /// Subtrees whose ideal corner does not weakly dominate `point` are
    /// skipped; a subtree whose nadir corner does is answered without
    /// looking at its points.
    pub fn is_covered(&self, point: &[f64]) -> Result<bool, NdTreeError> {
        self.check_dimension(point)?;
        let Some(root) = self.root else {
            return Ok(false);
        };

        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            let Some(bounds) = node.bounds() else {
                continue;
            };
            if !weakly_dominates(bounds.ideal(), point) {
                continue;
            }
            if weakly_dominates(bounds.nadir(), point) {
                return Ok(true);
            }
            if node.points().iter().any(|stored| weakly_dominates(stored, point)) {
                return Ok(true);
            }
            stack.extend_from_slice(node.children());
        }
        Ok(false)
    }

    /// Returns true if `point` is stored in the archive.
    ///
    /// Only subtrees whose rectangle contains `point` are visited.
    pub fn contains(&self, point: &[f64]) -> bool {
        if self.dimension != Some(point.len()) {
            return false;
        }
        let Some(root) = self.root else {
            return false;
        };

        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bounds().is_some_and(|bounds| bounds.contains(point)) {
                continue;
            }
            if node.points().iter().any(|stored| stored.coords() == point) {
                return true;
            }
            stack.extend_from_slice(node.children());
        }
        false
    }
}
