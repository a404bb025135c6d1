//! # Geometry Node
//!
//! The CSG tree node type. All values are fully resolved concrete numbers;
//! there are no deferred parameters or expressions.
//!
//! Two disjoint tag categories exist: primitives (leaf nodes carrying their
//! own numeric parameters) and composites (an operator applied to children).
//! Child order matters only for [`GeometryNode::Difference`], whose first
//! child is the minuend.

use serde::{Deserialize, Serialize};

// =============================================================================
// GEOMETRY NODE
// =============================================================================

/// A node in a CSG tree.
///
/// Nodes are immutable once constructed. Callers may wrap a returned tree
/// as the child of a new operator node, but never mutate a subtree's
/// internal parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryNode {
    // =========================================================================
    // 3D PRIMITIVES
    // =========================================================================

    /// Axis-aligned box.
    ///
    /// `center = false` places one corner at the origin; `center = true`
    /// centers the box about the origin on all axes. Per-axis centering is
    /// layered on top by the [`crate::centerize`] adapter.
    Cube {
        /// Size as [x, y, z].
        size: [f64; 3],
        /// Whether centered at origin.
        center: bool,
    },

    /// Sphere centered at the origin.
    Sphere {
        /// Radius.
        radius: f64,
        /// Number of fragments.
        segments: u32,
    },

    /// Cylinder or cone along +Z.
    Cylinder {
        /// Height.
        height: f64,
        /// Bottom radius.
        radius1: f64,
        /// Top radius.
        radius2: f64,
        /// Whether centered along Z.
        center: bool,
        /// Number of fragments.
        segments: u32,
    },

    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================

    /// 2D rectangle in the XY plane.
    Square {
        /// Size as [x, y].
        size: [f64; 2],
        /// Whether centered.
        center: bool,
    },

    /// 2D circle in the XY plane.
    ///
    /// With a small `segments` count this doubles as a regular polygon of
    /// the given circumradius.
    Circle {
        /// Radius.
        radius: f64,
        /// Number of fragments.
        segments: u32,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children. Child order is irrelevant.
    Union {
        /// Child geometries.
        children: Vec<GeometryNode>,
    },

    /// Difference: first child minus all subsequent children.
    Difference {
        /// Child geometries; the first is the minuend.
        children: Vec<GeometryNode>,
    },

    /// Intersection of children. Child order is irrelevant.
    Intersection {
        /// Child geometries.
        children: Vec<GeometryNode>,
    },

    /// Convex hull of children. Child order is irrelevant.
    Hull {
        /// Child geometries to hull.
        children: Vec<GeometryNode>,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Translation.
    Translate {
        /// Translation vector [x, y, z].
        offset: [f64; 3],
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    /// Rotation by Euler angles in degrees, applied X then Y then Z.
    Rotate {
        /// Rotation angles [x, y, z] in degrees.
        angles: [f64; 3],
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    /// Mirror across the plane through the origin with the given normal.
    Mirror {
        /// Mirror plane normal.
        normal: [f64; 3],
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    /// Non-uniform scale.
    Scale {
        /// Scale factors [x, y, z].
        factors: [f64; 3],
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    // =========================================================================
    // EXTRUSION
    // =========================================================================

    /// Linear extrusion of a 2D child along +Z.
    ///
    /// Carried for the 2D render fallback: a 2D profile wrapped in a thin
    /// extrusion becomes renderable as a solid.
    LinearExtrude {
        /// Extrusion height.
        height: f64,
        /// Child 2D geometry.
        child: Box<GeometryNode>,
    },
}

impl GeometryNode {
    /// Returns the number of child nodes.
    pub fn child_count(&self) -> usize {
        match self {
            GeometryNode::Cube { .. }
            | GeometryNode::Sphere { .. }
            | GeometryNode::Cylinder { .. }
            | GeometryNode::Square { .. }
            | GeometryNode::Circle { .. } => 0,
            GeometryNode::Union { children }
            | GeometryNode::Difference { children }
            | GeometryNode::Intersection { children }
            | GeometryNode::Hull { children } => children.len(),
            GeometryNode::Translate { .. }
            | GeometryNode::Rotate { .. }
            | GeometryNode::Mirror { .. }
            | GeometryNode::Scale { .. }
            | GeometryNode::LinearExtrude { .. } => 1,
        }
    }

    /// Returns true if this is a 2D primitive.
    pub fn is_2d(&self) -> bool {
        matches!(self, Self::Square { .. } | Self::Circle { .. })
    }

    /// Returns true if this is a 3D primitive.
    pub fn is_3d(&self) -> bool {
        matches!(
            self,
            Self::Cube { .. } | Self::Sphere { .. } | Self::Cylinder { .. }
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
