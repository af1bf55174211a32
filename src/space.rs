//! Free-space tracking and guillotine splitting.
//!
//! The engine maintains a list of axis-aligned empty sub-volumes of the
//! container. Placing a box consumes one space and replaces it with up to
//! three guillotine residuals (right of, in front of, and above the box).
//! The residuals of a split tile the consumed space exactly, so the active
//! set stays pairwise disjoint and placements never overlap.

use std::cmp::Ordering;

use nalgebra::Vector3;

use crate::boundary::Container;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-9;

/// An axis-aligned empty rectangular volume available for placement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space {
    /// Minimum corner, (x, y, z) with y vertical.
    pub origin: Vector3<f64>,
    /// Extents, (x = length, y = height, z = width).
    pub extents: Vector3<f64>,
}

impl Space {
    /// Creates a new space.
    pub fn new(origin: Vector3<f64>, extents: Vector3<f64>) -> Self {
        Self { origin, extents }
    }

    /// Checks if a box with the given extents fits in this space.
    pub fn fits(&self, extents: &Vector3<f64>) -> bool {
        extents.x <= self.extents.x + EPS
            && extents.y <= self.extents.y + EPS
            && extents.z <= self.extents.z + EPS
    }

    /// Guillotine-splits this space around a box with the given extents
    /// placed at the space origin.
    ///
    /// Produces up to three residuals, each kept only if its remaining
    /// extent is positive:
    /// - right of the box (remaining length, full width and height),
    /// - in front of the box (box length, remaining width, full height),
    /// - above the box (box footprint, remaining height).
    pub fn split(&self, extents: &Vector3<f64>) -> Vec<Space> {
        let mut residuals = Vec::with_capacity(3);

        let rest_length = self.extents.x - extents.x;
        if rest_length > EPS {
            residuals.push(Space::new(
                Vector3::new(self.origin.x + extents.x, self.origin.y, self.origin.z),
                Vector3::new(rest_length, self.extents.y, self.extents.z),
            ));
        }

        let rest_width = self.extents.z - extents.z;
        if rest_width > EPS {
            residuals.push(Space::new(
                Vector3::new(self.origin.x, self.origin.y, self.origin.z + extents.z),
                Vector3::new(extents.x, self.extents.y, rest_width),
            ));
        }

        let rest_height = self.extents.y - extents.y;
        if rest_height > EPS {
            residuals.push(Space::new(
                Vector3::new(self.origin.x, self.origin.y + extents.y, self.origin.z),
                Vector3::new(extents.x, rest_height, extents.z),
            ));
        }

        residuals
    }

    /// Returns the volume of this space.
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }
}

/// The active set of free spaces inside a container.
#[derive(Debug, Clone)]
pub struct SpaceList {
    spaces: Vec<Space>,
    min_extent: f64,
}

impl SpaceList {
    /// Creates a space list with a single space covering the whole container.
    pub fn new(container: &Container, min_extent: f64) -> Self {
        Self {
            spaces: vec![Space::new(Vector3::zeros(), container.extents())],
            min_extent,
        }
    }

    /// Returns the active spaces in scan order.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Returns the number of active spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Returns true if no spaces remain.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Consumes the space at `index` with a box of the given extents placed
    /// at its origin, replacing it with its guillotine residuals, then
    /// re-sorts the list (ascending y, then x, then z, preferring spaces
    /// lower and closer to the entry corner) and discards spaces with any
    /// extent at or below the minimum usable size.
    pub fn consume(&mut self, index: usize, extents: &Vector3<f64>) {
        let consumed = self.spaces.swap_remove(index);
        self.spaces.extend(consumed.split(extents));

        let min = self.min_extent;
        self.spaces
            .retain(|s| s.extents.x > min && s.extents.y > min && s.extents.z > min);
        self.spaces.sort_by(compare_scan_order);
    }
}

fn compare_scan_order(a: &Space, b: &Space) -> Ordering {
    a.origin
        .y
        .partial_cmp(&b.origin.y)
        .unwrap_or(Ordering::Equal)
        .then(
            a.origin
                .x
                .partial_cmp(&b.origin.x)
                .unwrap_or(Ordering::Equal),
        )
        .then(
            a.origin
                .z
                .partial_cmp(&b.origin.z)
                .unwrap_or(Ordering::Equal),
        )
}
