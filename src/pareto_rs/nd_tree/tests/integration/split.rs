/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Leaf overflow and the shape of the tree after splits.

use nd_tree::NodePayload;
use rstest::rstest;

use crate::helpers::{add_all, archive, sphere_front, walk_with_depth};

#[test]
fn leaf_fills_up_to_capacity_without_splitting() {
    let mut archive = archive(4, 2);
    add_all(&mut archive, sphere_front(4, 2, 1));

    let root = archive.root().unwrap();
    assert!(root.is_leaf());
    assert_eq!(root.points().len(), 4);
}

#[test]
fn overflowing_root_becomes_internal() {
    let mut archive = archive(3, 2);
    add_all(&mut archive, [[0.0, 3.0], [3.0, 0.0], [2.0, 2.0]]);
    assert!(archive.root().unwrap().is_leaf());

    let rv = archive.add([1.0, 2.5]).unwrap();
    assert!(rv.accepted);
    assert!(rv.changed);

    let root_idx = archive.root_index().unwrap();
    let root = archive.node(root_idx);
    let NodePayload::Internal(children) = root.payload() else {
        panic!("root should have split");
    };
    assert_eq!(children.len(), 2);
    let mut total = 0;
    for &child in children {
        let child = archive.node(child);
        assert!(child.is_leaf());
        assert_eq!(child.parent(), Some(root_idx));
        assert!(!child.points().is_empty());
        total += child.points().len();
    }
    assert_eq!(total, 4);
    archive.check_tree_invariants();
}

#[test]
fn split_rectangles_cover_their_points() {
    let mut archive = archive(2, 3);
    add_all(&mut archive, sphere_front(40, 3, 17));

    for node in &archive {
        let bounds = node.bounds().expect("every node has a rectangle");
        for point in node.points() {
            assert!(bounds.contains(point));
        }
        for &child in node.children() {
            let child_bounds = archive.node(child).bounds().unwrap();
            assert!(bounds.contains_rectangle(child_bounds));
        }
    }
}

#[rstest]
#[case(1, 2)]
#[case(2, 2)]
#[case(3, 4)]
#[case(8, 3)]
#[case(20, 4)]
fn shape_holds_for_large_fronts(#[case] max_leaf_points: usize, #[case] split_children: usize) {
    let mut archive = archive(max_leaf_points, split_children);
    add_all(&mut archive, sphere_front(300, 4, 23));
    assert_eq!(archive.len(), 300);

    let mut leaves = 0;
    let mut max_depth = 0;
    walk_with_depth(&archive, &mut |node, depth| {
        max_depth = max_depth.max(depth);
        match node.payload() {
            NodePayload::Leaf(points) => {
                leaves += 1;
                assert!(!points.is_empty());
                assert!(points.len() <= max_leaf_points);
            }
            NodePayload::Internal(children) => {
                assert!(children.len() >= 2);
                assert!(children.len() <= split_children.max(2));
            }
        }
    });

    assert_eq!(leaves, archive.num_leaves());
    assert_eq!(max_depth, archive.summary().depth);
    assert!(leaves >= 300_usize.div_ceil(max_leaf_points));
}
