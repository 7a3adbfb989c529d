/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Points in objective space and the dominance relations between them.
//!
//! All relations use the maximization convention: larger coordinates are
//! better.

use std::ops::Deref;

/// A point in an n-dimensional objective space.
///
/// The dimensionality is fixed by the first point added to a
/// [`ParetoArchive`](crate::ParetoArchive); the point itself does not enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Point(Box<[f64]>);

impl Point {
    /// Create a point from its coordinates.
    pub fn new(coords: impl Into<Box<[f64]>>) -> Self {
        Self(coords.into())
    }

    /// The point's coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Number of objectives.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Consume the point, returning its coordinates.
    pub fn into_vec(self) -> Vec<f64> {
        self.0.into_vec()
    }
}

impl Deref for Point {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords.into_boxed_slice())
    }
}

impl From<&[f64]> for Point {
    fn from(coords: &[f64]) -> Self {
        Self(coords.into())
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self(Box::new(coords))
    }
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.into_vec()
    }
}

/// Returns true if `a` is at least as good as `b` in every objective.
///
/// Equal points weakly dominate each other.
pub fn weakly_dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(x, y)| x >= y)
}

/// Returns true if `a` dominates `b`: at least as good everywhere, and not equal.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    weakly_dominates(a, b) && a != b
}

/// Returns true if `a` is strictly better than `b` in every objective.
pub fn strictly_dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(x, y)| x > y)
}

/// Euclidean distance between two points of the same dimensionality.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
