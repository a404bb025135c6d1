//! # Centerizing Adapter
//!
//! Axis-aligned primitives natively center only via a single boolean flag:
//! the whole shape is either origin-cornered or centered about the origin.
//! This adapter layers independent per-axis centering on top, so a shape
//! can be centered in X and Y but origin-aligned in Z, for example.
//!
//! The per-axis form constructs the shape uncentered and translates it by
//! `-(size * center) / 2` element-wise. Flags are typically 0 or 1 per
//! axis, but fractional values express partial offsets.

use glam::DVec3;

use crate::builder::translate;
use crate::node::GeometryNode;

// =============================================================================
// CENTER SPECIFICATION
// =============================================================================

/// Centering mode for an `N`-dimensional axis-aligned primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Center<const N: usize> {
    /// Delegate to the primitive's native boolean flag.
    Uniform(bool),
    /// One centering flag per axis; 0 leaves the axis origin-aligned,
    /// 1 centers it, fractional values shift partially.
    PerAxis([f64; N]),
}

// =============================================================================
// ADAPTER
// =============================================================================

/// Wrap a flag-centered constructor into one accepting [`Center`].
///
/// `func` is the underlying constructor taking a size and the native
/// boolean flag. The returned constructor additionally accepts per-axis
/// flags, implemented as an uncentered construction followed by a
/// translation.
pub fn centerize<const N: usize, F>(func: F) -> impl Fn([f64; N], Center<N>) -> GeometryNode
where
    F: Fn([f64; N], bool) -> GeometryNode,
{
    move |size, center| match center {
        Center::Uniform(flag) => func(size, flag),
        Center::PerAxis(axes) => {
            // Pad 2D sizes with a zero Z component; the element-wise
            // product then yields a zero Z offset.
            let mut size3 = [0.0; 3];
            let mut axes3 = [0.0; 3];
            size3[..N].copy_from_slice(&size);
            axes3[..N].copy_from_slice(&axes);
            let offset = -(DVec3::from_array(size3) * DVec3::from_array(axes3)) / 2.0;
            translate(offset.to_array(), func(size, false))
        }
    }
}

// =============================================================================
// WRAPPED PRIMITIVES
// =============================================================================

/// Box with per-axis centering.
pub fn cube(size: [f64; 3], center: Center<3>) -> GeometryNode {
    centerize(|size, center| GeometryNode::Cube { size, center })(size, center)
}

/// 2D rectangle with per-axis centering.
pub fn square(size: [f64; 2], center: Center<2>) -> GeometryNode {
    centerize(|size, center| GeometryNode::Square { size, center })(size, center)
}

// =============================================================================
// TESTS
// =============================================================================
