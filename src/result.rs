//! Packing result and aggregate statistics.

use crate::placement::PlacedBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate statistics of a packing run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingStats {
    /// Total number of requested units.
    pub total_boxes: usize,

    /// Number of units placed.
    pub packed_boxes: usize,

    /// Number of units that could not be placed.
    pub unpacked_boxes: usize,

    /// Volume of the container.
    pub container_volume: f64,

    /// Summed volume of placed boxes.
    pub used_volume: f64,

    /// Utilization percentage, rounded to one decimal.
    pub utilization_percent: f64,

    /// Summed weight of placed boxes.
    pub total_weight: f64,
}

/// Per-spec record of units that could not be placed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnpackedSpec {
    /// ID of the spec.
    pub spec_id: String,

    /// Display name of the spec.
    pub name: String,

    /// Unrotated length (x extent).
    pub length: f64,

    /// Unrotated width (z extent).
    pub width: f64,

    /// Unrotated height (y extent).
    pub height: f64,

    /// Weight of one box.
    pub weight: f64,

    /// Whether the spec is fragile.
    pub fragile: bool,

    /// Display color of the spec.
    pub color: String,

    /// Number of units of this spec left unplaced.
    pub quantity: usize,
}

/// The full output of a packing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// True iff at least one box was placed.
    pub success: bool,

    /// Placed boxes, in placement order.
    pub placements: Vec<PlacedBox>,

    /// Per-spec unplaced quantities, in input spec order.
    pub unpacked: Vec<UnpackedSpec>,

    /// Aggregate statistics.
    pub stats: PackingStats,
}

impl PackingResult {
    /// Returns true if every requested unit was placed.
    pub fn all_placed(&self) -> bool {
        self.unpacked.is_empty()
    }

    /// Returns the number of placed units.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of unplaced units.
    pub fn unplaced_count(&self) -> usize {
        self.unpacked.iter().map(|u| u.quantity).sum()
    }

    /// Returns the utilization as a display string.
    pub fn utilization_display(&self) -> String {
        format!("{:.1}%", self.stats.utilization_percent)
    }
}

/// Rounds a used/total volume ratio to a percentage with one decimal.
pub(crate) fn utilization_percent(used_volume: f64, container_volume: f64) -> f64 {
    (used_volume / container_volume * 1000.0).round() / 10.0
}
