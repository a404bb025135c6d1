//! # Rounding Profiles
//!
//! Blended rounding and pointing solids, used as fillet and anti-drip
//! tools. Both variants hull a full-size round profile with a
//! near-degenerate anchor shape, producing a smooth blend from the round
//! profile down to a point or flat disc. Parts with a steep bottom print
//! better when filleted with these.

use config::constants::{DISC_FUDGE, POINT_FUDGE, SPHERE_SEGMENTS};
use csg_ir::builder::{cylinder, down, hull_all, sphere, up};
use csg_ir::centerize::{cube, Center};
use csg_ir::AnnotatedShape;

use crate::error::{require_positive, FeatureError};

/// Rounding sphere blended down to a sharp point.
///
/// `dist_fac` controls steepness: the point sits `rad * dist_fac` below
/// the sphere center, and the whole solid is raised so its lowest point is
/// at the origin.
///
/// Metadata: `total_height = rad + rad * dist_fac`, `rad`.
pub fn pointed_sphere(rad: f64, dist_fac: f64) -> Result<AnnotatedShape, FeatureError> {
    require_positive("rad", rad)?;
    require_positive("dist_fac", dist_fac)?;

    let dist = rad * dist_fac;
    let point = down(dist, cylinder(POINT_FUDGE, POINT_FUDGE, true, SPHERE_SEGMENTS));
    let node = up(dist, hull_all(vec![sphere(rad, SPHERE_SEGMENTS), point]));

    Ok(AnnotatedShape::new(node)
        .with("total_height", rad + dist)
        .with("rad", rad))
}

/// Thin cone from a point at the origin up to a disc of radius `rad` at
/// height `rad * dist_fac`; a subtraction tool for bevelling edges.
///
/// Metadata: `rad`, `total_height = rad * dist_fac`.
pub fn bevel_cone(rad: f64, dist_fac: f64) -> Result<AnnotatedShape, FeatureError> {
    require_positive("rad", rad)?;
    require_positive("dist_fac", dist_fac)?;

    let dist = rad * dist_fac;
    let disc = up(dist, cylinder(DISC_FUDGE, rad, false, SPHERE_SEGMENTS));
    let tip = cube([DISC_FUDGE, DISC_FUDGE, DISC_FUDGE], Center::Uniform(true));
    let node = hull_all(vec![disc, tip]);

    Ok(AnnotatedShape::new(node)
        .with("rad", rad)
        .with("total_height", dist))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::approx_equal;

    #[test]
    fn test_pointed_sphere_metadata_invariant() {
        for (rad, dist_fac) in [(0.5, 1.2), (2.0, 0.7), (10.0, 3.0)] {
            let shape = pointed_sphere(rad, dist_fac).expect("valid parameters");
            let total = shape.get("total_height").unwrap();
            assert!(approx_equal(total, rad + rad * dist_fac));
            assert_eq!(shape.get("rad"), Some(rad));
        }
    }

    #[test]
    fn test_pointed_sphere_is_raised_hull() {
        let shape = pointed_sphere(0.5, 1.2).unwrap();
        // Outermost node lifts the hull so the point sits at the origin
        match &shape.node {
            csg_ir::GeometryNode::Translate { offset, child } => {
                assert!(approx_equal(offset[2], 0.6));
                assert_eq!(child.child_count(), 2);
            }
            other => panic!("expected Translate, got {other:?}"),
        }
    }

    #[test]
    fn test_bevel_cone_metadata() {
        let shape = bevel_cone(3.0, 1.5).unwrap();
        assert_eq!(shape.get("rad"), Some(3.0));
        assert!(approx_equal(shape.get("total_height").unwrap(), 4.5));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            pointed_sphere(0.0, 1.2),
            Err(FeatureError::InvalidParameter { name: "rad", .. })
        ));
        assert!(matches!(
            pointed_sphere(1.0, -0.5),
            Err(FeatureError::InvalidParameter { name: "dist_fac", .. })
        ));
        assert!(bevel_cone(-1.0, 1.0).is_err());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            pointed_sphere(0.5, 1.2).unwrap(),
            pointed_sphere(0.5, 1.2).unwrap()
        );
        assert_eq!(bevel_cone(2.0, 1.0).unwrap(), bevel_cone(2.0, 1.0).unwrap());
    }
}
