//! Placed box representation.

use nalgebra::Vector3;

use crate::geometry::{BoxSpec, Orientation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-9;

/// Rotation descriptor reported for a placement.
///
/// Only the length/width swap about the vertical axis is distinguished from
/// the identity. Orientations that move the height extent onto a horizontal
/// axis are reported as [`Rotation::Identity`] even though the placed extents
/// differ from the original; the effective dimensions on the placement are
/// authoritative for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Extents match the original (length, width, height) order.
    #[default]
    Identity,
    /// Length and width swapped: a quarter turn about the vertical axis.
    QuarterTurn,
}

impl Rotation {
    /// Determines the descriptor for a set of effective extents, given the
    /// original (length, width, height).
    ///
    /// Extent equality wins over permutation identity: a length/width swap of
    /// a square-footprint box reports as identity.
    pub fn for_extents(original: (f64, f64, f64), effective: (f64, f64, f64)) -> Self {
        if effective == original {
            Rotation::Identity
        } else if effective == (original.1, original.0, original.2) {
            Rotation::QuarterTurn
        } else {
            Rotation::Identity
        }
    }
}

/// A successfully placed box: the originating spec's attributes bound to a
/// position and the effective extents of the chosen orientation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// ID of the originating spec.
    pub spec_id: String,

    /// Display name of the originating spec.
    pub name: String,

    /// Instance index (0-based) within the spec's quantity.
    pub instance: usize,

    /// Minimum corner, (x, y, z) with y vertical.
    pub position: Vector3<f64>,

    /// Effective extents after orientation, (x = length, y = height,
    /// z = width).
    pub dimensions: Vector3<f64>,

    /// Rotation descriptor for the chosen orientation.
    pub rotation: Rotation,

    /// Weight of the box.
    pub weight: f64,

    /// Whether the originating spec is fragile.
    pub fragile: bool,

    /// Display color of the originating spec.
    pub color: String,
}

impl PlacedBox {
    /// Creates a placed box from a spec, an instance index, a position and
    /// the chosen orientation.
    pub fn new(
        spec: &BoxSpec,
        instance: usize,
        position: Vector3<f64>,
        orientation: &Orientation,
    ) -> Self {
        Self {
            spec_id: spec.id().clone(),
            name: spec.name().to_string(),
            instance,
            position,
            dimensions: orientation.extents,
            rotation: orientation.rotation,
            weight: spec.weight(),
            fragile: spec.is_fragile(),
            color: spec.color().to_string(),
        }
    }

    /// Returns the maximum corner of the box.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.position + self.dimensions
    }

    /// Returns the y coordinate of the top face.
    pub fn top(&self) -> f64 {
        self.position.y + self.dimensions.y
    }

    /// Returns the y coordinate of the bottom face.
    pub fn bottom(&self) -> f64 {
        self.position.y
    }

    /// Returns the occupied volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Checks if this box overlaps another box in volume.
    pub fn overlaps(&self, other: &PlacedBox) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();

        let no_overlap_x =
            self.position.x >= other_max.x - EPS || other.position.x >= self_max.x - EPS;
        let no_overlap_y =
            self.position.y >= other_max.y - EPS || other.position.y >= self_max.y - EPS;
        let no_overlap_z =
            self.position.z >= other_max.z - EPS || other.position.z >= self_max.z - EPS;

        !(no_overlap_x || no_overlap_y || no_overlap_z)
    }

    /// Checks if this box's horizontal footprint (x/z extents) overlaps
    /// another box's footprint, ignoring height.
    pub fn footprint_overlaps(&self, other: &PlacedBox) -> bool {
        footprints_overlap(
            self.position,
            self.dimensions,
            other.position,
            other.dimensions,
        )
    }
}

/// Footprint overlap test between two axis-aligned regions given by minimum
/// corner and extents.
pub(crate) fn footprints_overlap(
    a_pos: Vector3<f64>,
    a_dims: Vector3<f64>,
    b_pos: Vector3<f64>,
    b_dims: Vector3<f64>,
) -> bool {
    let no_overlap_x = a_pos.x >= b_pos.x + b_dims.x - EPS || b_pos.x >= a_pos.x + a_dims.x - EPS;
    let no_overlap_z = a_pos.z >= b_pos.z + b_dims.z - EPS || b_pos.z >= a_pos.z + a_dims.z - EPS;
    !(no_overlap_x || no_overlap_z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxSpec;

    fn placed(id: &str, pos: (f64, f64, f64), dims: (f64, f64, f64)) -> PlacedBox {
        // dims given as (length, width, height) for readability
        let spec = BoxSpec::new(id, dims.0, dims.1, dims.2);
        let ori = spec.allowed_orientations()[0];
        PlacedBox::new(&spec, 0, Vector3::new(pos.0, pos.1, pos.2), &ori)
    }

    #[test]
    fn test_rotation_for_extents() {
        let original = (10.0, 20.0, 30.0);
        assert_eq!(
            Rotation::for_extents(original, (10.0, 20.0, 30.0)),
            Rotation::Identity
        );
        assert_eq!(
            Rotation::for_extents(original, (20.0, 10.0, 30.0)),
            Rotation::QuarterTurn
        );
        // Height moved to a horizontal axis still reports identity.
        assert_eq!(
            Rotation::for_extents(original, (30.0, 20.0, 10.0)),
            Rotation::Identity
        );
    }

    #[test]
    fn test_rotation_square_footprint_is_identity() {
        // A swap that produces the same extents is not a visible rotation.
        assert_eq!(
            Rotation::for_extents((10.0, 10.0, 5.0), (10.0, 10.0, 5.0)),
            Rotation::Identity
        );
    }

    #[test]
    fn test_overlap() {
        let a = placed("A", (0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let b = placed("B", (5.0, 5.0, 5.0), (10.0, 10.0, 10.0));
        let c = placed("C", (15.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let touching = placed("D", (10.0, 0.0, 0.0), (10.0, 10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&touching));
    }

    #[test]
    fn test_footprint_overlap_ignores_height() {
        let ground = placed("A", (0.0, 0.0, 0.0), (10.0, 10.0, 10.0));
        let above = placed("B", (5.0, 50.0, 5.0), (10.0, 10.0, 10.0));
        let beside = placed("C", (10.0, 50.0, 0.0), (10.0, 10.0, 10.0));

        assert!(ground.footprint_overlaps(&above));
        assert!(!ground.footprint_overlaps(&beside));
    }

    #[test]
    fn test_faces_and_volume() {
        let a = placed("A", (1.0, 2.0, 3.0), (10.0, 20.0, 5.0));
        assert_eq!(a.bottom(), 2.0);
        assert_eq!(a.top(), 7.0);
        assert_eq!(a.volume(), 1000.0);
        assert_eq!(a.max_corner(), Vector3::new(11.0, 7.0, 23.0));
    }
}
