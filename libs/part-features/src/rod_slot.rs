//! # Rod Slot
//!
//! Keyed clearance channel for a cylindrical rod. The bore is oversized to
//! guarantee a through-cut, and the optional "hat" bulge lets a rod be
//! inserted at an angle then rotated into place while resisting withdrawal
//! the other way. A square access channel sized to pass diagonally through
//! the round bore reaches far below the assembly.

use config::constants::{CIRCLE_SEGMENTS, POINT_FUDGE, THROUGH_FACTOR};
use csg_ir::builder::{cylinder_d, down, forward, hull_all, rotate, union};
use csg_ir::centerize::{cube, Center};
use csg_ir::AnnotatedShape;

use crate::error::{require_positive, FeatureError};

/// Side length factor for the square access channel: a square of
/// `rod_diam * sqrt(2) / 2` passes diagonally through the round bore, plus
/// 10% clearance.
const SLOT_KEY_CLEARANCE: f64 = 1.1;

/// Lateral hat displacement as a fraction of the rod diameter.
const HAT_DIST_FACTOR: f64 = 0.9;

/// Keyed clearance channel for a rod of the given diameter, oriented so
/// the bore lies along the assembly direction after the final 90 degree
/// rotation about X.
///
/// Metadata: `rod_diam`, `slot_side`.
pub fn rod_slot(
    rod_diam: f64,
    rod_length: f64,
    with_hat: bool,
) -> Result<AnnotatedShape, FeatureError> {
    require_positive("rod_diam", rod_diam)?;
    require_positive("rod_length", rod_length)?;

    let bore_length = THROUGH_FACTOR * rod_length;

    let mut bore = cylinder_d(bore_length, rod_diam, false, CIRCLE_SEGMENTS);
    if with_hat {
        let hat = forward(
            HAT_DIST_FACTOR * rod_diam,
            cube(
                [POINT_FUDGE, POINT_FUDGE, bore_length],
                Center::PerAxis([1.0, 1.0, 0.0]),
            ),
        );
        bore = hull_all(vec![bore, hat]);
    }
    let bore = down(rod_length / 2.0, bore);

    let slot_side = rod_diam * std::f64::consts::SQRT_2 / 2.0 * SLOT_KEY_CLEARANCE;
    let slot = down(
        bore_length + rod_length / 2.0,
        cube(
            [slot_side, slot_side, 2.0 * bore_length],
            Center::Uniform(true),
        ),
    );

    let node = rotate([90.0, 0.0, 0.0], union(bore, slot));

    Ok(AnnotatedShape::new(node)
        .with("rod_diam", rod_diam)
        .with("slot_side", slot_side))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::approx_equal;
    use csg_ir::GeometryNode;

    fn assembly_of(shape: &AnnotatedShape) -> &GeometryNode {
        match &shape.node {
            GeometryNode::Rotate { angles, child } => {
                assert_eq!(*angles, [90.0, 0.0, 0.0]);
                child
            }
            other => panic!("expected outer Rotate, got {other:?}"),
        }
    }

    #[test]
    fn test_slot_side_passes_diagonally() {
        let shape = rod_slot(8.0, 30.0, false).unwrap();
        let side = shape.get("slot_side").unwrap();
        assert!(approx_equal(side, 8.0 * std::f64::consts::SQRT_2 / 2.0 * 1.1));
        // Wider than the half-diagonal but narrower than the bore
        assert!(side < 8.0);
    }

    #[test]
    fn test_without_hat_bore_is_plain_cylinder() {
        let shape = rod_slot(8.0, 30.0, false).unwrap();
        match assembly_of(&shape) {
            GeometryNode::Union { children } => match &children[0] {
                GeometryNode::Translate { offset, child } => {
                    assert!(approx_equal(offset[2], -15.0));
                    assert!(matches!(**child, GeometryNode::Cylinder { .. }));
                }
                other => panic!("expected lowered bore, got {other:?}"),
            },
            other => panic!("expected Union, got {other:?}"),
        }
    }

    #[test]
    fn test_with_hat_hulls_displaced_box() {
        let shape = rod_slot(8.0, 30.0, true).unwrap();
        match assembly_of(&shape) {
            GeometryNode::Union { children } => match &children[0] {
                GeometryNode::Translate { child, .. } => match &**child {
                    GeometryNode::Hull { children } => {
                        assert_eq!(children.len(), 2);
                        match &children[1] {
                            GeometryNode::Translate { offset, .. } => {
                                assert!(approx_equal(offset[1], 0.9 * 8.0));
                            }
                            other => panic!("expected displaced hat, got {other:?}"),
                        }
                    }
                    other => panic!("expected Hull, got {other:?}"),
                },
                other => panic!("expected lowered bore, got {other:?}"),
            },
            other => panic!("expected Union, got {other:?}"),
        }
    }

    #[test]
    fn test_access_channel_reaches_far_below() {
        let shape = rod_slot(8.0, 30.0, false).unwrap();
        match assembly_of(&shape) {
            GeometryNode::Union { children } => match &children[1] {
                GeometryNode::Translate { offset, child } => {
                    assert!(approx_equal(offset[2], -(300.0 + 15.0)));
                    match &**child {
                        GeometryNode::Cube { size, center } => {
                            assert!(*center);
                            assert!(approx_equal(size[2], 600.0));
                        }
                        other => panic!("expected Cube, got {other:?}"),
                    }
                }
                other => panic!("expected lowered slot, got {other:?}"),
            },
            other => panic!("expected Union, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(rod_slot(0.0, 30.0, true).is_err());
        assert!(rod_slot(8.0, -1.0, false).is_err());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(rod_slot(8.0, 30.0, true).unwrap(), rod_slot(8.0, 30.0, true).unwrap());
    }
}
