//! Fragile-stacking constraint.
//!
//! Fragile boxes accept only a limited number of boxes resting directly on
//! their top face. The rule constrains direct resting only: stacking on
//! non-fragile boxes, and boxes merely passing above a fragile box without
//! touching it, are unrestricted.

use nalgebra::Vector3;

use crate::placement::{footprints_overlap, PlacedBox};

/// Checks whether a candidate placement respects the fragile-stacking rule.
///
/// A candidate at `position` with `extents` is rejected when some placed
/// fragile box F has its top face level with the candidate's bottom face
/// (within `epsilon`), the candidate's footprint overlaps F's footprint, and
/// at least `limit` already-placed boxes rest at that height over F's
/// footprint.
pub fn allows_placement(
    position: Vector3<f64>,
    extents: Vector3<f64>,
    placed: &[PlacedBox],
    epsilon: f64,
    limit: usize,
) -> bool {
    for fragile in placed.iter().filter(|b| b.fragile) {
        let top = fragile.top();
        if (position.y - top).abs() > epsilon {
            continue;
        }
        if !footprints_overlap(
            position,
            extents,
            fragile.position,
            fragile.dimensions,
        ) {
            continue;
        }

        let resting = placed
            .iter()
            .filter(|b| (b.bottom() - top).abs() <= epsilon && b.footprint_overlaps(fragile))
            .count();
        if resting >= limit {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxSpec;

    fn placed_at(spec: &BoxSpec, pos: (f64, f64, f64)) -> PlacedBox {
        let ori = spec.allowed_orientations()[0];
        PlacedBox::new(spec, 0, Vector3::new(pos.0, pos.1, pos.2), &ori)
    }

    #[test]
    fn test_third_box_on_fragile_rejected() {
        let base = BoxSpec::new("base", 20.0, 20.0, 5.0).with_fragile(true);
        let small = BoxSpec::new("small", 8.0, 8.0, 5.0);

        // Two small boxes already rest on the fragile base.
        let placed = vec![
            placed_at(&base, (0.0, 0.0, 0.0)),
            placed_at(&small, (0.0, 5.0, 0.0)),
            placed_at(&small, (10.0, 5.0, 0.0)),
        ];

        // A third box at the same height over the base footprint.
        let rejected = !allows_placement(
            Vector3::new(0.0, 5.0, 10.0),
            Vector3::new(8.0, 5.0, 8.0),
            &placed,
            0.1,
            2,
        );
        assert!(rejected);
    }

    #[test]
    fn test_second_box_on_fragile_allowed() {
        let base = BoxSpec::new("base", 20.0, 20.0, 5.0).with_fragile(true);
        let small = BoxSpec::new("small", 8.0, 8.0, 5.0);

        let placed = vec![
            placed_at(&base, (0.0, 0.0, 0.0)),
            placed_at(&small, (0.0, 5.0, 0.0)),
        ];

        assert!(allows_placement(
            Vector3::new(10.0, 5.0, 0.0),
            Vector3::new(8.0, 5.0, 8.0),
            &placed,
            0.1,
            2,
        ));
    }

    #[test]
    fn test_non_fragile_base_unrestricted() {
        let base = BoxSpec::new("base", 20.0, 20.0, 5.0);
        let small = BoxSpec::new("small", 8.0, 8.0, 5.0);

        let placed = vec![
            placed_at(&base, (0.0, 0.0, 0.0)),
            placed_at(&small, (0.0, 5.0, 0.0)),
            placed_at(&small, (10.0, 5.0, 0.0)),
        ];

        assert!(allows_placement(
            Vector3::new(0.0, 5.0, 10.0),
            Vector3::new(8.0, 5.0, 8.0),
            &placed,
            0.1,
            2,
        ));
    }

    #[test]
    fn test_disjoint_footprint_not_constrained() {
        let base = BoxSpec::new("base", 20.0, 20.0, 5.0).with_fragile(true);
        let small = BoxSpec::new("small", 8.0, 8.0, 5.0);

        let placed = vec![
            placed_at(&base, (0.0, 0.0, 0.0)),
            placed_at(&small, (0.0, 5.0, 0.0)),
            placed_at(&small, (10.0, 5.0, 0.0)),
        ];

        // Same height but entirely beside the fragile base.
        assert!(allows_placement(
            Vector3::new(30.0, 5.0, 0.0),
            Vector3::new(8.0, 5.0, 8.0),
            &placed,
            0.1,
            2,
        ));
    }

    #[test]
    fn test_height_tolerance() {
        let base = BoxSpec::new("base", 20.0, 20.0, 5.0).with_fragile(true);
        let small = BoxSpec::new("small", 8.0, 8.0, 5.0);

        let placed = vec![
            placed_at(&base, (0.0, 0.0, 0.0)),
            placed_at(&small, (0.0, 5.05, 0.0)),
            placed_at(&small, (10.0, 4.95, 0.0)),
        ];

        // Both off-by-0.05 boxes count as resting on the base; a third is
        // rejected within the tolerance band.
        assert!(!allows_placement(
            Vector3::new(0.0, 5.08, 10.0),
            Vector3::new(8.0, 5.0, 8.0),
            &placed,
            0.1,
            2,
        ));
    }
}
