/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Local bounding hyperrectangles of tree nodes.

use crate::point::weakly_dominates;

/// Axis-aligned box bounding every point stored in a subtree.
///
/// The `nadir` corner is the componentwise minimum and the `ideal` corner the
/// componentwise maximum. A node with no points has no rectangle at all, so
/// `nadir <= ideal` holds for every value of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    nadir: Box<[f64]>,
    ideal: Box<[f64]>,
}

/// How a candidate point relates to a [`Rectangle`] under dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxRelation {
    /// The nadir corner weakly dominates the point: so does every point in the box.
    Dominated,
    /// The point weakly dominates the ideal corner: it dominates the whole box.
    Dominates,
    /// Some point in the box may dominate, or be dominated by, the candidate.
    Overlaps,
    /// No point in the box can be compared with the candidate.
    Incomparable,
}

impl Rectangle {
    /// A degenerate rectangle containing only `point`.
    pub fn from_point(point: &[f64]) -> Self {
        Self {
            nadir: point.into(),
            ideal: point.into(),
        }
    }

    /// Componentwise minimum corner.
    pub fn nadir(&self) -> &[f64] {
        &self.nadir
    }

    /// Componentwise maximum corner.
    pub fn ideal(&self) -> &[f64] {
        &self.ideal
    }

    /// Widen the rectangle so that it contains `point`.
    ///
    /// Returns true if the rectangle changed.
    pub fn expand(&mut self, point: &[f64]) -> bool {
        let mut widened = false;
        for ((lo, hi), &value) in self.nadir.iter_mut().zip(self.ideal.iter_mut()).zip(point) {
            if value < *lo {
                *lo = value;
                widened = true;
            }
            if value > *hi {
                *hi = value;
                widened = true;
            }
        }
        widened
    }

    /// Returns true if `point` lies inside the rectangle (bounds inclusive).
    pub fn contains(&self, point: &[f64]) -> bool {
        weakly_dominates(point, &self.nadir) && weakly_dominates(&self.ideal, point)
    }

    /// Returns true if `other` lies entirely inside this rectangle.
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.contains(&other.nadir) && self.contains(&other.ideal)
    }

    /// The point halfway between the two corners.
    pub fn midpoint(&self) -> Vec<f64> {
        self.nadir
            .iter()
            .zip(self.ideal.iter())
            .map(|(lo, hi)| lo + (hi - lo) / 2.0)
            .collect()
    }

    /// Euclidean distance from `point` to [`Self::midpoint`].
    pub fn distance_to_midpoint(&self, point: &[f64]) -> f64 {
        self.nadir
            .iter()
            .zip(self.ideal.iter())
            .zip(point)
            .map(|((lo, hi), value)| {
                let delta = value - (lo + (hi - lo) / 2.0);
                delta * delta
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Classify `point` against this rectangle.
    ///
    /// The checks are ordered: a point equal to a degenerate rectangle is
    /// [`BoxRelation::Dominated`], not [`BoxRelation::Dominates`].
    pub fn relation(&self, point: &[f64]) -> BoxRelation {
        if weakly_dominates(&self.nadir, point) {
            BoxRelation::Dominated
        } else if weakly_dominates(point, &self.ideal) {
            BoxRelation::Dominates
        } else if weakly_dominates(&self.ideal, point) || weakly_dominates(point, &self.nadir) {
            BoxRelation::Overlaps
        } else {
            BoxRelation::Incomparable
        }
    }
}
