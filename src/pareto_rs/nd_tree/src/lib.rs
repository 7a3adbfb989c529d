/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! ParetoArchive - An incrementally maintained Pareto front backed by an ND-tree.
//!
//! The archive stores a set of mutually non-dominated points in an
//! n-dimensional objective space (larger is better in every objective).
//! Points are clustered in a tree whose nodes carry the bounding rectangle
//! of their subtree, so that checking a new point for dominance only visits
//! the few clusters it can interact with.
//!
//! # Overview
//!
//! - A new point dominated by (or equal to) a stored point is rejected.
//! - An accepted point evicts every stored point it dominates.
//! - Leaves split once they exceed a configured capacity, and internal nodes
//!   left with a single child collapse into it.
//!
//! # Example
//!
//! ```
//! use nd_tree::{NdTreeConfig, ParetoArchive, Point};
//!
//! let mut archive = ParetoArchive::new(NdTreeConfig::new(2, 2)?);
//!
//! archive.add([1.0, 1.0])?;
//! archive.add([2.0, 2.0])?; // dominates (1, 1)
//! assert!(!archive.add([0.0, 0.0])?.accepted);
//! archive.add([3.0, 0.0])?;
//!
//! let mut front = archive.export_points();
//! front.sort_by(|a, b| a.coords().partial_cmp(b.coords()).unwrap());
//! assert_eq!(front, vec![Point::from([2.0, 2.0]), Point::from([3.0, 0.0])]);
//! # Ok::<(), nd_tree::NdTreeError>(())
//! ```

mod arena;
mod config;
mod debug;
mod error;
mod iter;
mod node;
mod point;
mod rectangle;
mod tree;

pub use arena::NodeIndex;
pub use config::NdTreeConfig;
pub use debug::TreeSummary;
pub use error::NdTreeError;
pub use iter::{Points, PreOrderDfsIterator};
pub use node::{NdTreeNode, NodePayload};
pub use point::{Point, dominates, euclidean_distance, strictly_dominates, weakly_dominates};
pub use rectangle::{BoxRelation, Rectangle};
pub use tree::{AddResult, ParetoArchive};
