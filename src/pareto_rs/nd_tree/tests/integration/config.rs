/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Validation of `NdTreeConfig`.

use nd_tree::{NdTreeConfig, NdTreeError, ParetoArchive};
use rstest::rstest;

#[rstest]
#[case(1, 2)]
#[case(20, 4)]
#[case(100, 10)]
fn valid_parameters(#[case] max_leaf_points: usize, #[case] split_children: usize) {
    let config = NdTreeConfig::new(max_leaf_points, split_children).unwrap();
    assert_eq!(config.max_leaf_points(), max_leaf_points);
    assert_eq!(config.split_children(), split_children);
}

#[rstest]
#[case::zero_capacity(0, 2, NdTreeError::InvalidLeafCapacity { min: 1, got: 0 })]
#[case::zero_children(5, 0, NdTreeError::InvalidSplitChildren { min: 2, got: 0 })]
#[case::one_child(5, 1, NdTreeError::InvalidSplitChildren { min: 2, got: 1 })]
#[case::capacity_checked_first(0, 1, NdTreeError::InvalidLeafCapacity { min: 1, got: 0 })]
fn invalid_parameters(
    #[case] max_leaf_points: usize,
    #[case] split_children: usize,
    #[case] expected: NdTreeError,
) {
    assert_eq!(NdTreeConfig::new(max_leaf_points, split_children), Err(expected.clone()));
    assert_eq!(
        ParetoArchive::with_params(max_leaf_points, split_children).unwrap_err(),
        expected
    );
}

#[test]
fn defaults() {
    let config = NdTreeConfig::default();
    assert_eq!(config.max_leaf_points(), NdTreeConfig::DEFAULT_LEAF_POINTS);
    assert_eq!(config.split_children(), NdTreeConfig::DEFAULT_SPLIT_CHILDREN);
    assert_eq!(ParetoArchive::default().config(), config);
}

#[test]
fn error_messages() {
    assert_eq!(
        NdTreeError::InvalidLeafCapacity { min: 1, got: 0 }.to_string(),
        "leaf capacity must be at least 1, got 0"
    );
    assert_eq!(
        NdTreeError::InvalidSplitChildren { min: 2, got: 1 }.to_string(),
        "a split must produce at least 2 children, got 1"
    );
    assert_eq!(
        NdTreeError::DimensionMismatch { expected: 2, actual: 3 }.to_string(),
        "point has 3 coordinates, but the archive stores 2-dimensional points"
    );
}
