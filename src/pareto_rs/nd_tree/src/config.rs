/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tuning parameters of the ND-tree.

use crate::NdTreeError;

/// Validated tuning parameters for a [`ParetoArchive`](crate::ParetoArchive).
///
/// Both values are checked once, at construction; an existing config is
/// always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdTreeConfig {
    /// Maximum number of points a leaf holds before it is split.
    max_leaf_points: usize,
    /// Number of children a split produces.
    split_children: usize,
}

impl NdTreeConfig {
    /// Smallest accepted leaf capacity.
    pub const MIN_LEAF_POINTS: usize = 1;

    /// Smallest accepted branching factor of a split.
    pub const MIN_SPLIT_CHILDREN: usize = 2;

    /// Leaf capacity used by [`Default`].
    pub const DEFAULT_LEAF_POINTS: usize = 20;

    /// Branching factor used by [`Default`].
    pub const DEFAULT_SPLIT_CHILDREN: usize = 4;

    /// Validate and build a config.
    pub const fn new(max_leaf_points: usize, split_children: usize) -> Result<Self, NdTreeError> {
        if max_leaf_points < Self::MIN_LEAF_POINTS {
            return Err(NdTreeError::InvalidLeafCapacity {
                min: Self::MIN_LEAF_POINTS,
                got: max_leaf_points,
            });
        }
        if split_children < Self::MIN_SPLIT_CHILDREN {
            return Err(NdTreeError::InvalidSplitChildren {
                min: Self::MIN_SPLIT_CHILDREN,
                got: split_children,
            });
        }
        Ok(Self {
            max_leaf_points,
            split_children,
        })
    }

    /// Maximum number of points a leaf holds at rest.
    pub const fn max_leaf_points(&self) -> usize {
        self.max_leaf_points
    }

    /// Number of children a split tries to seed.
    ///
    /// A split seeds fewer children when the overflowing leaf holds fewer
    /// points than this, but never fewer than two.
    pub const fn split_children(&self) -> usize {
        self.split_children
    }
}

impl Default for NdTreeConfig {
    fn default() -> Self {
        Self {
            max_leaf_points: Self::DEFAULT_LEAF_POINTS,
            split_children: Self::DEFAULT_SPLIT_CHILDREN,
        }
    }
}
