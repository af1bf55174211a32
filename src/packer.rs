//! Greedy first-fit packing engine.

use std::cmp::Ordering;

use crate::boundary::Container;
use crate::geometry::{BoxSpec, Orientation};
use crate::placement::PlacedBox;
use crate::result::{utilization_percent, PackingResult, PackingStats, UnpackedSpec};
use crate::space::SpaceList;
use crate::stacking;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the packing engine.
///
/// The defaults only need changing for non-standard unit scales.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Spaces with any extent at or below this size are discarded as
    /// unusably small.
    pub min_space_extent: f64,

    /// Tolerance for treating a box's bottom face as resting on a fragile
    /// box's top face.
    pub support_epsilon: f64,

    /// Maximum number of boxes allowed to rest directly on a fragile box.
    pub fragile_stack_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_space_extent: 1.0,
            support_epsilon: 0.1,
            fragile_stack_limit: 2,
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum usable space extent.
    pub fn with_min_space_extent(mut self, extent: f64) -> Self {
        self.min_space_extent = extent;
        self
    }

    /// Sets the resting-face tolerance.
    pub fn with_support_epsilon(mut self, epsilon: f64) -> Self {
        self.support_epsilon = epsilon;
        self
    }

    /// Sets the fragile stacking limit.
    pub fn with_fragile_stack_limit(mut self, limit: usize) -> Self {
        self.fragile_stack_limit = limit;
        self
    }
}

/// Greedy first-fit packing engine.
///
/// A pure computation over its inputs: each call owns its working state and
/// repeated calls with identical inputs produce identical results.
pub struct Packer {
    config: Config,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Computes a placement of the requested boxes into the container.
    ///
    /// Units are placed largest-volume first into the first free space and
    /// orientation that fit and pass the fragile-stacking rule. Units with
    /// no feasible placement are routed to the unpacked list; the engine
    /// never fails. Input is assumed pre-validated (see
    /// [`Container::validate`] and [`BoxSpec::validate`]).
    pub fn pack(&self, container: &Container, specs: &[BoxSpec]) -> PackingResult {
        // Demand expansion: one unit per requested box, remembering its
        // originating spec and instance index.
        let mut units: Vec<(usize, usize)> = Vec::new();
        for (spec_idx, spec) in specs.iter().enumerate() {
            for instance in 0..spec.quantity() {
                units.push((spec_idx, instance));
            }
        }

        // Decreasing-volume order; the stable sort keeps input order for
        // equal volumes, which makes the result deterministic.
        units.sort_by(|a, b| {
            specs[b.0]
                .volume()
                .partial_cmp(&specs[a.0].volume())
                .unwrap_or(Ordering::Equal)
        });

        let mut spaces = SpaceList::new(container, self.config.min_space_extent);
        let mut placements: Vec<PlacedBox> = Vec::new();
        let mut unpacked_counts = vec![0usize; specs.len()];

        for &(spec_idx, instance) in &units {
            let spec = &specs[spec_idx];
            let orientations = spec.allowed_orientations();

            match self.find_placement(&spaces, &orientations, &placements) {
                Some((space_idx, orientation)) => {
                    let origin = spaces.spaces()[space_idx].origin;
                    placements.push(PlacedBox::new(spec, instance, origin, &orientation));
                    spaces.consume(space_idx, &orientation.extents);
                }
                None => {
                    log::trace!(
                        "no feasible placement for '{}' instance {}",
                        spec.id(),
                        instance
                    );
                    unpacked_counts[spec_idx] += 1;
                }
            }
        }

        let unpacked: Vec<UnpackedSpec> = specs
            .iter()
            .zip(&unpacked_counts)
            .filter(|(_, &count)| count > 0)
            .map(|(spec, &count)| UnpackedSpec {
                spec_id: spec.id().clone(),
                name: spec.name().to_string(),
                length: spec.length(),
                width: spec.width(),
                height: spec.height(),
                weight: spec.weight(),
                fragile: spec.is_fragile(),
                color: spec.color().to_string(),
                quantity: count,
            })
            .collect();

        let container_volume = container.volume();
        let used_volume: f64 = placements.iter().map(PlacedBox::volume).sum();
        let total_weight: f64 = placements.iter().map(|p| p.weight).sum();

        let stats = PackingStats {
            total_boxes: units.len(),
            packed_boxes: placements.len(),
            unpacked_boxes: units.len() - placements.len(),
            container_volume,
            used_volume,
            utilization_percent: utilization_percent(used_volume, container_volume),
            total_weight,
        };

        log::debug!(
            "packed {}/{} units, utilization {:.1}%",
            stats.packed_boxes,
            stats.total_boxes,
            stats.utilization_percent
        );

        PackingResult {
            success: !placements.is_empty(),
            placements,
            unpacked,
            stats,
        }
    }

    /// First-fit search: scans spaces in list order and, within each space,
    /// the orientation candidates in enumeration order. Returns the first
    /// feasible (space index, orientation) pair.
    fn find_placement(
        &self,
        spaces: &SpaceList,
        orientations: &[Orientation],
        placements: &[PlacedBox],
    ) -> Option<(usize, Orientation)> {
        for (space_idx, space) in spaces.spaces().iter().enumerate() {
            for orientation in orientations {
                if space.fits(&orientation.extents)
                    && stacking::allows_placement(
                        space.origin,
                        orientation.extents,
                        placements,
                        self.config.support_epsilon,
                        self.config.fragile_stack_limit,
                    )
                {
                    return Some((space_idx, *orientation));
                }
            }
        }
        None
    }
}

/// Packs the requested boxes into the container with default configuration.
pub fn pack(container: &Container, specs: &[BoxSpec]) -> PackingResult {
    Packer::default_config().pack(container, specs)
}
