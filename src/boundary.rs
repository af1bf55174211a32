//! Container boundary type.

use nalgebra::Vector3;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangular container volume that all placements must stay inside.
///
/// Axis convention, used consistently across the crate: x = length,
/// y = height (vertical), z = width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Extent along the x axis.
    length: f64,
    /// Extent along the z axis.
    width: f64,
    /// Extent along the y (vertical) axis.
    height: f64,
}

impl Container {
    /// Creates a new container with the given dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
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

    /// Returns the extents as a vector in crate axis order (x, y, z) =
    /// (length, height, width).
    pub fn extents(&self) -> Vector3<f64> {
        Vector3::new(self.length, self.height, self.width)
    }

    /// Returns the container volume.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Validates the container dimensions.
    ///
    /// The engine assumes pre-validated input and does not call this itself;
    /// it is offered for callers that collect dimensions from user input.
    pub fn validate(&self) -> Result<()> {
        if self.length <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidContainer(
                "All dimensions must be positive".into(),
            ));
        }
        Ok(())
    }
}
