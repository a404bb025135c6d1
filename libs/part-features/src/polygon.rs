//! # Regular Polygon
//!
//! Regular n-gon built as an n-segment circle approximation, with the
//! apothem (inradius) derived alongside so callers can place a flat edge
//! without redoing the trigonometry.

use csg_ir::builder::{circle, right};
use csg_ir::AnnotatedShape;

use crate::error::{require_positive, FeatureError};

/// Radial size of a regular polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolyRadius {
    /// Center-to-corner distance.
    Circumradius(f64),
    /// Corner-to-corner distance.
    Diameter(f64),
}

impl PolyRadius {
    fn circumradius(self) -> f64 {
        match self {
            PolyRadius::Circumradius(r) => r,
            PolyRadius::Diameter(d) => d / 2.0,
        }
    }
}

/// Regular `n`-gon of the given radial size.
///
/// With `y0`, the polygon is shifted along +X by its apothem so one flat
/// edge lies on the Y axis.
///
/// Metadata: `apothem = r * cos(pi/n)`, `height = apothem + r`.
pub fn regular_polygon(
    radius: PolyRadius,
    n: u32,
    y0: bool,
) -> Result<AnnotatedShape, FeatureError> {
    let r = radius.circumradius();
    require_positive("radius", r)?;
    if n < 3 {
        return Err(FeatureError::InvalidSegmentCount(n));
    }

    let apothem = (std::f64::consts::PI / n as f64).cos() * r;
    let mut node = circle(r, n);
    if y0 {
        node = right(apothem, node);
    }

    Ok(AnnotatedShape::new(node)
        .with("apothem", apothem)
        .with("height", apothem + r))
}

// =============================================================================
// TESTS
// =============================================================================
