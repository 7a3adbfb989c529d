/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the Pareto archive using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use nd_tree::{NdTreeConfig, ParetoArchive, weakly_dominates};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use crate::helpers::{init_tracing, reference_front, stored};

    /// Points on a small integer grid, so duplicates and ties in single
    /// coordinates are common.
    fn grid_points() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (2usize..=4).prop_flat_map(|dimension| {
            proptest::collection::vec(
                proptest::collection::vec((0u8..6).prop_map(f64::from), dimension),
                1..150,
            )
        })
    }

    fn configs() -> impl Strategy<Value = NdTreeConfig> {
        (1usize..6, 2usize..6).prop_map(|(max_leaf_points, split_children)| {
            NdTreeConfig::new(max_leaf_points, split_children).unwrap()
        })
    }

    fn build(config: NdTreeConfig, points: &[Vec<f64>]) -> ParetoArchive {
        init_tracing();
        let mut archive = ParetoArchive::new(config);
        for point in points {
            archive.add(point.clone()).unwrap();
            archive.check_tree_invariants();
        }
        archive
    }

    proptest! {
        #[test]
        fn prop_archive_is_the_pareto_front(points in grid_points(), config in configs()) {
            let archive = build(config, &points);
            prop_assert_eq!(stored(&archive), reference_front(&points));
        }

        #[test]
        fn prop_insertion_order_is_irrelevant(
            points in grid_points(),
            config in configs(),
            seed in any::<u64>(),
        ) {
            let mut shuffled = points.clone();
            shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

            let forward = build(config, &points);
            let reordered = build(config, &shuffled);
            prop_assert_eq!(stored(&forward), stored(&reordered));
        }

        #[test]
        fn prop_rejection_matches_is_covered(points in grid_points(), config in configs()) {
            init_tracing();
            let mut archive = ParetoArchive::new(config);
            for point in &points {
                let covered = archive.is_covered(point).unwrap();
                let revision = archive.revision_id();
                let rv = archive.add(point.clone()).unwrap();

                prop_assert_eq!(rv.accepted, !covered);
                if covered {
                    prop_assert_eq!(rv.num_points_removed, 0);
                    prop_assert_eq!(archive.revision_id(), revision);
                }
                if rv.accepted {
                    prop_assert!(archive.contains(point));
                }
            }
        }

        #[test]
        fn prop_reinserting_stored_points_is_a_no_op(points in grid_points(), config in configs()) {
            let mut archive = build(config, &points);
            let before = stored(&archive);
            let revision = archive.revision_id();

            for point in &points {
                let rv = archive.add(point.clone()).unwrap();
                prop_assert!(!rv.accepted);
                prop_assert!(!rv.changed);
            }
            prop_assert_eq!(stored(&archive), before);
            prop_assert_eq!(archive.revision_id(), revision);
        }

        #[test]
        fn prop_removed_counts_add_up(points in grid_points(), config in configs()) {
            init_tracing();
            let mut archive = ParetoArchive::new(config);
            let mut accepted = 0;
            let mut removed = 0;
            for point in &points {
                let before: Vec<Vec<f64>> = stored(&archive);
                let rv = archive.add(point.clone()).unwrap();
                let evicted = before.iter().filter(|p| weakly_dominates(point, p)).count();
                if rv.accepted {
                    prop_assert_eq!(rv.num_points_removed, evicted);
                    accepted += 1;
                }
                removed += rv.num_points_removed;
            }
            prop_assert_eq!(archive.len(), accepted - removed);
        }
    }
}
