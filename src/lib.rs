//! # stowpack
//!
//! A greedy 3D container load placement engine.
//!
//! Given a rectangular [`Container`] and a list of [`BoxSpec`] values with
//! requested quantities, the engine computes positions and orientations for
//! the boxes and reports utilization statistics for visual inspection of
//! loading plans.
//!
//! ## Algorithm
//!
//! Units are sorted largest-volume first and placed first-fit into a list of
//! free spaces maintained by guillotine decomposition: each placement splits
//! the consumed space into up-to-three residuals (right of, in front of and
//! above the box). Fragile boxes stay upright and accept at most a limited
//! number of boxes resting directly on top. This is a fast heuristic, not an
//! optimal packing.
//!
//! ## Example
//!
//! ```rust
//! use stowpack::{pack, BoxSpec, Container};
//!
//! let container = Container::new(100.0, 100.0, 100.0);
//! let specs = vec![
//!     BoxSpec::new("crate", 50.0, 50.0, 50.0).with_weight(12.0).with_quantity(2),
//!     BoxSpec::new("glassware", 20.0, 20.0, 20.0).with_fragile(true),
//! ];
//!
//! let result = pack(&container, &specs);
//! assert!(result.success);
//! println!("utilization: {}", result.utilization_display());
//! ```
//!
//! ## Coordinate convention
//!
//! x = length, y = height (vertical), z = width, everywhere in the crate.
//!
//! ## Feature flags
//!
//! - `serde`: serialization/deserialization support for the public types.

pub mod boundary;
pub mod error;
pub mod geometry;
pub mod packer;
pub mod placement;
pub mod result;
pub mod space;
pub mod stacking;

// Re-exports
pub use boundary::Container;
pub use error::{Error, Result};
pub use geometry::{BoxSpec, Orientation, SpecId};
pub use packer::{pack, Config, Packer};
pub use placement::{PlacedBox, Rotation};
pub use result::{PackingResult, PackingStats, UnpackedSpec};
pub use space::{Space, SpaceList};
