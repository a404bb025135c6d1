//! # Angular Profiles
//!
//! 2D circular sectors and constant-width arcs.
//!
//! A sector is built from two half-plane rectangles rotated to the sector's
//! bounding radii. For angles below 180 degrees their intersection bounds
//! the angular extent; at 180 degrees and above two half-planes can no
//! longer bound the angle by intersection, so their union is taken instead.
//! Intersecting with a full circle bounds the wedge radially.

use config::constants::CIRCLE_SEGMENTS;
use csg_ir::builder::{circle, difference, intersection, mirror, rotate_z, union};
use csg_ir::centerize::{square, Center};
use csg_ir::AnnotatedShape;

use crate::error::{require_positive, FeatureError};

fn require_angle(angle: f64) -> Result<(), FeatureError> {
    if angle > 0.0 && angle <= 360.0 {
        Ok(())
    } else {
        Err(FeatureError::InvalidAngle(angle))
    }
}

/// Pie slice of radius `rad` spanning `angle` degrees, centered on the
/// positive X axis.
///
/// Metadata: `rad`, `angle`.
pub fn sector(rad: f64, angle: f64) -> Result<AnnotatedShape, FeatureError> {
    require_positive("rad", rad)?;
    require_angle(angle)?;

    // Half-plane slab: x in [-rad, rad], y in [0, rad]
    let slab = square([2.0 * rad, rad], Center::PerAxis([1.0, 0.0]));
    let lower = rotate_z(-angle / 2.0, slab.clone());
    let upper = rotate_z(angle / 2.0, mirror([0.0, 1.0, 0.0], slab));

    let wedge = if angle < 180.0 {
        intersection(lower, upper)
    } else {
        union(lower, upper)
    };
    let node = intersection(wedge, circle(rad, CIRCLE_SEGMENTS));

    Ok(AnnotatedShape::new(node)
        .with("rad", rad)
        .with("angle", angle))
}

/// Ring segment of mean radius `rad`, angular span `angle` degrees and
/// radial width `width`.
///
/// Metadata: `rad`, `angle`, `width`.
pub fn arc(rad: f64, angle: f64, width: f64) -> Result<AnnotatedShape, FeatureError> {
    require_positive("rad", rad)?;
    require_positive("width", width)?;
    require_angle(angle)?;
    if width / 2.0 >= rad {
        // Inner radius would vanish or go negative
        return Err(FeatureError::InvalidParameter {
            name: "width",
            value: width,
        });
    }

    let outer = sector(rad + width / 2.0, angle)?;
    let node = difference(outer.node, circle(rad - width / 2.0, CIRCLE_SEGMENTS));

    Ok(AnnotatedShape::new(node)
        .with("rad", rad)
        .with("angle", angle)
        .with("width", width))
}

// =============================================================================
// TESTS
// =============================================================================
