/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read-only queries: `is_covered` and `contains`.

use nd_tree::{NdTreeError, ParetoArchive, weakly_dominates};

use crate::helpers::{add_all, archive, random_points, sphere_front};

#[test]
fn empty_archive_covers_nothing() {
    let archive = ParetoArchive::default();
    assert_eq!(archive.is_covered(&[0.0, 0.0]), Ok(false));
    assert!(!archive.contains(&[0.0, 0.0]));
}

#[test]
fn covered_points_are_the_rejected_ones() {
    let mut archive = archive(2, 2);
    add_all(&mut archive, [[5.0, 5.0], [1.0, 9.0], [9.0, 1.0]]);

    assert_eq!(archive.is_covered(&[5.0, 5.0]), Ok(true));
    assert_eq!(archive.is_covered(&[4.0, 4.0]), Ok(true));
    assert_eq!(archive.is_covered(&[0.0, 9.0]), Ok(true));
    assert_eq!(archive.is_covered(&[6.0, 6.0]), Ok(false));
    assert_eq!(archive.is_covered(&[0.0, 10.0]), Ok(false));
}

#[test]
fn is_covered_agrees_with_brute_force() {
    let mut archive = archive(3, 3);
    add_all(&mut archive, sphere_front(120, 3, 31));
    let stored = archive.export_points();

    for probe in random_points(500, 3, 37) {
        let probe: Vec<f64> = probe.iter().map(|c| c * 1.2).collect();
        let expected = stored.iter().any(|p| weakly_dominates(p, &probe));
        assert_eq!(archive.is_covered(&probe), Ok(expected), "probe {probe:?}");
    }
}

#[test]
fn is_covered_does_not_modify_the_archive() {
    let mut archive = archive(2, 2);
    add_all(&mut archive, sphere_front(30, 2, 41));
    let revision = archive.revision_id();
    let len = archive.len();

    assert_eq!(archive.is_covered(&[2.0, 2.0]), Ok(false));
    assert_eq!(archive.is_covered(&[0.0, 0.0]), Ok(true));

    assert_eq!(archive.revision_id(), revision);
    assert_eq!(archive.len(), len);
}

#[test]
fn is_covered_checks_dimension() {
    let mut archive = archive(2, 2);
    archive.add([1.0, 1.0]).unwrap();
    assert_eq!(
        archive.is_covered(&[1.0, 1.0, 1.0]),
        Err(NdTreeError::DimensionMismatch {
            expected: 2,
            actual: 3,
        })
    );
}

#[test]
fn contains_finds_every_stored_point() {
    let mut archive = archive(2, 3);
    let front = sphere_front(60, 3, 43);
    add_all(&mut archive, front.clone());

    for point in &front {
        assert!(archive.contains(point), "{point:?} missing");
    }
    assert!(!archive.contains(&[0.0, 0.0, 0.0]));
    assert!(!archive.contains(&[1.0, 1.0]));
}

#[test]
fn contains_forgets_evicted_points() {
    let mut archive = archive(2, 2);
    archive.add([1.0, 1.0]).unwrap();
    archive.add([2.0, 2.0]).unwrap();
    assert!(!archive.contains(&[1.0, 1.0]));
    assert!(archive.contains(&[2.0, 2.0]));
}
