//! # Tree Builders
//!
//! Pure constructor functions building [`GeometryNode`] trees from resolved
//! parameters. The directional helpers (`up`, `down`, `left`, `right`,
//! `forward`, `back`) mirror the vocabulary the feature generators are
//! written in: `up(dist, shape)` reads as "shape, raised by dist".
//!
//! Structurally invalid composites are unrepresentable by construction:
//! transforms take exactly one child, and [`difference`] takes its minuend
//! by position.

use crate::node::GeometryNode;

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Sphere of the given radius centered at the origin.
pub fn sphere(radius: f64, segments: u32) -> GeometryNode {
    GeometryNode::Sphere { radius, segments }
}

/// Cylinder of constant radius along +Z.
pub fn cylinder(height: f64, radius: f64, center: bool, segments: u32) -> GeometryNode {
    GeometryNode::Cylinder {
        height,
        radius1: radius,
        radius2: radius,
        center,
        segments,
    }
}

/// Cylinder parameterized by diameter.
pub fn cylinder_d(height: f64, diameter: f64, center: bool, segments: u32) -> GeometryNode {
    cylinder(height, diameter / 2.0, center, segments)
}

/// 2D circle of the given radius.
pub fn circle(radius: f64, segments: u32) -> GeometryNode {
    GeometryNode::Circle { radius, segments }
}

/// 2D circle parameterized by diameter.
pub fn circle_d(diameter: f64, segments: u32) -> GeometryNode {
    circle(diameter / 2.0, segments)
}

// =============================================================================
// BOOLEAN OPERATIONS
// =============================================================================

/// Union of two shapes.
pub fn union(a: GeometryNode, b: GeometryNode) -> GeometryNode {
    GeometryNode::Union {
        children: vec![a, b],
    }
}

/// Union over an arbitrary list of shapes.
pub fn union_all(children: Vec<GeometryNode>) -> GeometryNode {
    GeometryNode::Union { children }
}

/// `base` minus `cut`.
pub fn difference(base: GeometryNode, cut: GeometryNode) -> GeometryNode {
    GeometryNode::Difference {
        children: vec![base, cut],
    }
}

/// Intersection of two shapes.
pub fn intersection(a: GeometryNode, b: GeometryNode) -> GeometryNode {
    GeometryNode::Intersection {
        children: vec![a, b],
    }
}

/// Convex hull over an arbitrary list of shapes.
pub fn hull_all(children: Vec<GeometryNode>) -> GeometryNode {
    GeometryNode::Hull { children }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Translate a shape by an arbitrary offset.
pub fn translate(offset: [f64; 3], child: GeometryNode) -> GeometryNode {
    GeometryNode::Translate {
        offset,
        child: Box::new(child),
    }
}

/// Raise a shape along +Z.
pub fn up(dist: f64, child: GeometryNode) -> GeometryNode {
    translate([0.0, 0.0, dist], child)
}

/// Lower a shape along -Z.
pub fn down(dist: f64, child: GeometryNode) -> GeometryNode {
    translate([0.0, 0.0, -dist], child)
}

/// Shift a shape along +X.
pub fn right(dist: f64, child: GeometryNode) -> GeometryNode {
    translate([dist, 0.0, 0.0], child)
}

/// Shift a shape along -X.
pub fn left(dist: f64, child: GeometryNode) -> GeometryNode {
    translate([-dist, 0.0, 0.0], child)
}

/// Shift a shape along +Y.
pub fn forward(dist: f64, child: GeometryNode) -> GeometryNode {
    translate([0.0, dist, 0.0], child)
}

/// Shift a shape along -Y.
pub fn back(dist: f64, child: GeometryNode) -> GeometryNode {
    translate([0.0, -dist, 0.0], child)
}

/// Rotate a shape by Euler angles in degrees, applied X then Y then Z.
pub fn rotate(angles: [f64; 3], child: GeometryNode) -> GeometryNode {
    GeometryNode::Rotate {
        angles,
        child: Box::new(child),
    }
}

/// Rotate a shape about +Z; the natural rotation for 2D profiles.
pub fn rotate_z(angle: f64, child: GeometryNode) -> GeometryNode {
    rotate([0.0, 0.0, angle], child)
}

/// Mirror a shape across the origin plane with the given normal.
pub fn mirror(normal: [f64; 3], child: GeometryNode) -> GeometryNode {
    GeometryNode::Mirror {
        normal,
        child: Box::new(child),
    }
}

/// Scale a shape by per-axis factors.
pub fn scale(factors: [f64; 3], child: GeometryNode) -> GeometryNode {
    GeometryNode::Scale {
        factors,
        child: Box::new(child),
    }
}

/// Extrude a 2D shape into a solid of the given height.
pub fn linear_extrude(height: f64, child: GeometryNode) -> GeometryNode {
    GeometryNode::LinearExtrude {
        height,
        child: Box::new(child),
    }
}

// =============================================================================
// TESTS
// =============================================================================
