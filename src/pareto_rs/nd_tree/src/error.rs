/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use thiserror::Error;

/// Errors returned by [`ParetoArchive`](crate::ParetoArchive) and
/// [`NdTreeConfig`](crate::NdTreeConfig).
///
/// Rejecting a dominated point is not an error: it is reported through
/// [`AddResult::accepted`](crate::AddResult::accepted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdTreeError {
    /// The leaf capacity is below the allowed minimum.
    #[error("leaf capacity must be at least {min}, got {got}")]
    InvalidLeafCapacity { min: usize, got: usize },
    /// The number of children produced by a split is below the allowed minimum.
    #[error("a split must produce at least {min} children, got {got}")]
    InvalidSplitChildren { min: usize, got: usize },
    /// A point's length differs from the dimensionality established by the
    /// first point added to the archive.
    #[error("point has {actual} coordinates, but the archive stores {expected}-dimensional points")]
    DimensionMismatch { expected: usize, actual: usize },
}
