//! Box specification and orientation enumeration.

use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::placement::Rotation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a box specification.
pub type SpecId = String;

/// One candidate orientation of a box: the effective extents after an axis
/// permutation, together with the rotation descriptor reported for it.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    /// Effective extents in crate axis order (x = length, y = height,
    /// z = width).
    pub extents: Vector3<f64>,
    /// Rotation descriptor for this orientation.
    pub rotation: Rotation,
}

/// A box type to be packed: dimensions, weight, fragility and a requested
/// quantity of identical physical boxes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSpec {
    /// Unique identifier.
    id: SpecId,

    /// Display name.
    name: String,

    /// Extent along the x axis.
    length: f64,

    /// Extent along the z axis.
    width: f64,

    /// Extent along the y (vertical) axis.
    height: f64,

    /// Weight of one box.
    weight: f64,

    /// Fragile boxes keep their height axis upright and accept at most a
    /// limited number of boxes resting directly on top.
    fragile: bool,

    /// Display color for the surrounding application.
    color: String,

    /// Number of identical boxes requested.
    quantity: usize,
}

/// Axis permutations in the fixed enumeration order tried by the engine.
/// Each triple is (length index, width index, height index) into the original
/// (length, width, height) dimensions.
const FREE_ORIENTATIONS: [(usize, usize, usize); 6] = [
    (0, 1, 2),
    (0, 2, 1),
    (1, 0, 2),
    (1, 2, 0),
    (2, 0, 1),
    (2, 1, 0),
];

/// Height-preserving permutations for fragile boxes.
const UPRIGHT_ORIENTATIONS: [(usize, usize, usize); 2] = [(0, 1, 2), (1, 0, 2)];

impl BoxSpec {
    /// Creates a new box spec with the given ID and dimensions.
    pub fn new(id: impl Into<SpecId>, length: f64, width: f64, height: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            length,
            width,
            height,
            weight: 0.0,
            fragile: false,
            color: String::new(),
            quantity: 1,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weight of one box.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Marks the spec as fragile.
    pub fn with_fragile(mut self, fragile: bool) -> Self {
        self.fragile = fragile;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the requested quantity.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Returns the unique identifier.
    pub fn id(&self) -> &SpecId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the length (x extent).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the width (z extent).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height (y extent).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the weight of one box.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns whether the spec is fragile.
    pub fn is_fragile(&self) -> bool {
        self.fragile
    }

    /// Returns the display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the requested quantity.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns the unrotated volume of one box.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns the unrotated extents in crate axis order (x, y, z) =
    /// (length, height, width).
    pub fn extents(&self) -> Vector3<f64> {
        Vector3::new(self.length, self.height, self.width)
    }

    /// Returns the orientation candidates for this spec, in the order the
    /// engine tries them.
    ///
    /// Non-fragile boxes may take any of the 6 axis permutations. Fragile
    /// boxes keep their original height on the vertical axis, leaving only
    /// the identity and the length/width swap.
    pub fn allowed_orientations(&self) -> Vec<Orientation> {
        let dims = [self.length, self.width, self.height];
        let perms: &[(usize, usize, usize)] = if self.fragile {
            &UPRIGHT_ORIENTATIONS
        } else {
            &FREE_ORIENTATIONS
        };

        perms
            .iter()
            .map(|&(li, wi, hi)| {
                let length = dims[li];
                let width = dims[wi];
                let height = dims[hi];
                Orientation {
                    extents: Vector3::new(length, height, width),
                    rotation: Rotation::for_extents(
                        (self.length, self.width, self.height),
                        (length, width, height),
                    ),
                }
            })
            .collect()
    }

    /// Validates the spec.
    ///
    /// As with [`Container::validate`](crate::Container::validate), the
    /// engine assumes pre-validated input; this helper exists for callers.
    pub fn validate(&self) -> Result<()> {
        if self.length <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidSpec(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.weight < 0.0 {
            return Err(Error::InvalidSpec(format!(
                "Weight for '{}' cannot be negative",
                self.id
            )));
        }

        Ok(())
    }
}
