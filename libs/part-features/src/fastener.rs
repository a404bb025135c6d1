//! # Fastener Features
//!
//! Screw clearance voids, counterbore templates, mounting bosses and nut
//! traps. Clearance tools are built as unions of cylinders around the
//! origin and meant for boolean subtraction; the templates use oversized
//! placeholder lengths so a cut always passes fully through the enclosing
//! solid.
//!
//! Named clearance sizes follow the through-hole standard (DIN EN 20273,
//! medium fit). An unrecognized name fails; it is never silently defaulted.

use config::constants::{CIRCLE_SEGMENTS, DISC_FUDGE, HEX_SEGMENTS, POINT_FUDGE, THROUGH_FACTOR};
use csg_ir::builder::{cylinder_d, difference, down, hull_all, left, mirror, translate, union, up};
use csg_ir::centerize::{cube, Center};
use csg_ir::AnnotatedShape;

use crate::error::{require_positive, FeatureError};

/// Height of the hex pocket cut by [`nut_bracket`]; tall enough for any
/// standard nut up to M6.
const NUT_POCKET_HEIGHT: f64 = 4.0;

/// Default shaft and head lengths for [`screw_clearance`].
const DEFAULT_CLEARANCE_LENGTH: f64 = 100.0;

// =============================================================================
// NUT GEOMETRY
// =============================================================================

/// Corner-to-corner diameter of a regular hexagon from its flat-to-flat
/// ("wrench") size.
///
/// # Example
///
/// ```rust
/// use part_features::fastener::nut_diam;
///
/// let d = nut_diam(10.0);
/// assert!((d - 11.547005).abs() < 1e-5);
/// ```
pub fn nut_diam(wrench_size: f64) -> f64 {
    wrench_size * 2.0 / 3.0_f64.sqrt()
}

// =============================================================================
// CLEARANCE TABLE
// =============================================================================

/// Look up (shaft, head) clearance diameters for a named screw size.
///
/// Read-only; shared by every [`screw_clearance`] call.
fn clearance_lookup(size: &str) -> Result<(f64, f64), FeatureError> {
    match size {
        "M4" => Ok((4.7, 8.1)),
        "M6" => Ok((6.8, 11.0)),
        other => Err(FeatureError::UnknownPartSize(other.to_string())),
    }
}

// =============================================================================
// CLEARANCE VOIDS
// =============================================================================

/// Clearance void for a named screw size: shaft cylinder extending
/// downward from the origin, head cylinder extending upward. Subtract it
/// to get a through-hole with head pocket.
///
/// Metadata: `shaft_diam`, `head_diam`, `shaft_length`, `head_length`.
pub fn screw_clearance(size: &str) -> Result<AnnotatedShape, FeatureError> {
    let (shaft_diam, head_diam) = clearance_lookup(size)?;
    screw_clearance_custom(
        shaft_diam,
        head_diam,
        DEFAULT_CLEARANCE_LENGTH,
        DEFAULT_CLEARANCE_LENGTH,
    )
}

/// Clearance void from explicit diameters and lengths.
///
/// The shaft is raised by an epsilon before mirroring downward so its top
/// face overlaps the head cylinder instead of meeting it in a
/// zero-thickness seam.
pub fn screw_clearance_custom(
    shaft_diam: f64,
    head_diam: f64,
    shaft_length: f64,
    head_length: f64,
) -> Result<AnnotatedShape, FeatureError> {
    require_positive("shaft_diam", shaft_diam)?;
    require_positive("head_diam", head_diam)?;
    require_positive("shaft_length", shaft_length)?;
    require_positive("head_length", head_length)?;

    let shaft = up(
        DISC_FUDGE,
        mirror(
            [0.0, 0.0, 1.0],
            cylinder_d(shaft_length, shaft_diam, false, CIRCLE_SEGMENTS),
        ),
    );
    let head = cylinder_d(head_length, head_diam, false, CIRCLE_SEGMENTS);

    Ok(AnnotatedShape::new(union(shaft, head))
        .with("shaft_diam", shaft_diam)
        .with("head_diam", head_diam)
        .with("shaft_length", shaft_length)
        .with("head_length", head_length))
}

/// Reusable "infinite hole" subtraction tool: a shaft-hole cylinder of
/// placeholder length reaching far below the origin, unioned with a head
/// counterbore of one third that length above it. The excess must be
/// trimmed by the enclosing boolean structure.
///
/// Metadata: `placeholder_length`.
pub fn bolt_hole_template(diam_hole: f64, diam_head: f64) -> Result<AnnotatedShape, FeatureError> {
    require_positive("diam_hole", diam_hole)?;
    require_positive("diam_head", diam_head)?;

    let length = THROUGH_FACTOR * diam_head;
    let shaft = down(
        length - DISC_FUDGE,
        cylinder_d(length, diam_hole, false, CIRCLE_SEGMENTS),
    );
    let head = cylinder_d(length / 3.0, diam_head, false, CIRCLE_SEGMENTS);

    Ok(AnnotatedShape::new(union(shaft, head)).with("placeholder_length", length))
}

// =============================================================================
// MOUNTING BOSS
// =============================================================================

/// Dimensions for [`mounting_boss`]. Defaults fit an M4 screw with a
/// 12 mm washer head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossParams {
    /// Boss height.
    pub base_height: f64,
    /// Lateral clearance around the screw head.
    pub lateral_space: f64,
    /// Material thickness retained below the hole.
    pub base_strength: f64,
    /// Shaft clearance diameter.
    pub hole_diam: f64,
    /// Head clearance diameter.
    pub head_diam: f64,
}

impl Default for BossParams {
    fn default() -> Self {
        Self {
            base_height: 4.0,
            lateral_space: 2.0,
            base_strength: 2.0,
            hole_diam: 4.7,
            head_diam: 12.0,
        }
    }
}

/// Cylindrical mounting boss with an M4 clearance void, sized by
/// [`BossParams::default`].
pub fn mounting_boss(flat_side: bool) -> Result<AnnotatedShape, FeatureError> {
    mounting_boss_with(&BossParams::default(), flat_side)
}

/// Cylindrical boss enclosing a screw head with lateral clearance, minus a
/// [`bolt_hole_template`] void raised by the base-strength floor.
///
/// With `flat_side`, the boss is hulled with an epsilon-thin tab at its +X
/// rim and then shifted so the flat face sits at the origin, ready to butt
/// flush against a wall.
///
/// Metadata: `width`, `height`.
pub fn mounting_boss_with(
    params: &BossParams,
    flat_side: bool,
) -> Result<AnnotatedShape, FeatureError> {
    require_positive("base_height", params.base_height)?;
    require_positive("lateral_space", params.lateral_space)?;
    require_positive("base_strength", params.base_strength)?;

    let width = params.head_diam + 2.0 * params.lateral_space;

    let mut boss = cylinder_d(params.base_height, width, false, CIRCLE_SEGMENTS);
    if flat_side {
        let tab = translate(
            [width / 2.0, 0.0, params.base_height / 2.0],
            cube(
                [POINT_FUDGE, width, params.base_height],
                Center::Uniform(true),
            ),
        );
        boss = hull_all(vec![boss, tab]);
    }

    let void = bolt_hole_template(params.hole_diam, params.head_diam)?;
    let mut node = difference(boss, up(params.base_strength, void.node));
    if flat_side {
        node = left(width / 2.0, node);
    }

    Ok(AnnotatedShape::new(node)
        .with("width", width)
        .with("height", params.base_height))
}

// =============================================================================
// NUT BRACKET
// =============================================================================

/// Optional shape knobs for [`nut_bracket`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutBracketParams {
    /// Boss diameter; defaults to twice the wrench size.
    pub base_width: Option<f64>,
    /// Hull the boss with a rectangular extension toward +X.
    pub flat_side: bool,
    /// Extra reach of the flat-side extension beyond the boss radius.
    pub flat_side_dist: f64,
}

/// Boss with a captive-nut cavity: a hex pocket sized from
/// [`nut_diam`] above a `counterhole_strength` floor, plus a concentric
/// through-bore for the screw. Trapping a nut in the pocket gives the part
/// a reusable internal thread.
///
/// Metadata: `base_width`.
pub fn nut_bracket(
    wrench_size: f64,
    screw_diam: f64,
    base_thickness: f64,
    counterhole_strength: f64,
    params: &NutBracketParams,
) -> Result<AnnotatedShape, FeatureError> {
    require_positive("wrench_size", wrench_size)?;
    require_positive("screw_diam", screw_diam)?;
    require_positive("base_thickness", base_thickness)?;
    if counterhole_strength < 0.0 {
        return Err(FeatureError::InvalidParameter {
            name: "counterhole_strength",
            value: counterhole_strength,
        });
    }

    let base_width = params.base_width.unwrap_or(2.0 * wrench_size);
    require_positive("base_width", base_width)?;

    let pocket = up(
        counterhole_strength,
        cylinder_d(NUT_POCKET_HEIGHT, nut_diam(wrench_size), false, HEX_SEGMENTS),
    );
    let bore = cylinder_d(
        THROUGH_FACTOR * wrench_size,
        screw_diam,
        true,
        CIRCLE_SEGMENTS,
    );
    let void = union(pocket, bore);

    let mut bracket = cylinder_d(base_thickness, base_width, false, CIRCLE_SEGMENTS);
    if params.flat_side {
        let extension = cube(
            [
                base_width / 2.0 + params.flat_side_dist,
                base_width,
                base_thickness,
            ],
            Center::PerAxis([0.0, 1.0, 0.0]),
        );
        bracket = hull_all(vec![bracket, extension]);
    }

    Ok(AnnotatedShape::new(difference(bracket, void)).with("base_width", base_width))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::approx_equal;
    use csg_ir::GeometryNode;

    #[test]
    fn test_nut_diam_formula() {
        assert!((nut_diam(10.0) - 11.547005).abs() < 1e-5);
        assert!(approx_equal(nut_diam(7.0), 7.0 * 2.0 / 3.0_f64.sqrt()));
    }

    #[test]
    fn test_screw_clearance_m4() {
        let shape = screw_clearance("M4").unwrap();
        assert_eq!(shape.get("shaft_diam"), Some(4.7));
        assert_eq!(shape.get("head_diam"), Some(8.1));
    }

    #[test]
    fn test_screw_clearance_m6() {
        let shape = screw_clearance("M6").unwrap();
        assert_eq!(shape.get("shaft_diam"), Some(6.8));
        assert_eq!(shape.get("head_diam"), Some(11.0));
    }

    #[test]
    fn test_screw_clearance_unknown_size_fails() {
        assert_eq!(
            screw_clearance("M8"),
            Err(FeatureError::UnknownPartSize("M8".to_string()))
        );
        assert!(screw_clearance("").is_err());
    }

    #[test]
    fn test_screw_clearance_shaft_points_down() {
        let shape = screw_clearance("M4").unwrap();
        match &shape.node {
            GeometryNode::Union { children } => {
                // Shaft: raised epsilon, mirrored across XY
                match &children[0] {
                    GeometryNode::Translate { offset, child } => {
                        assert_eq!(offset[2], DISC_FUDGE);
                        assert!(matches!(**child, GeometryNode::Mirror { .. }));
                    }
                    other => panic!("expected Translate, got {other:?}"),
                }
                // Head: plain upward cylinder
                assert!(matches!(
                    children[1],
                    GeometryNode::Cylinder { radius1, .. } if approx_equal(radius1, 4.05)
                ));
            }
            other => panic!("expected Union, got {other:?}"),
        }
    }

    #[test]
    fn test_bolt_hole_template_placeholder_length() {
        let shape = bolt_hole_template(4.7, 12.0).unwrap();
        assert_eq!(shape.get("placeholder_length"), Some(120.0));
        match &shape.node {
            GeometryNode::Union { children } => {
                match &children[0] {
                    GeometryNode::Translate { offset, .. } => {
                        assert!(approx_equal(offset[2], -(120.0 - DISC_FUDGE)));
                    }
                    other => panic!("expected Translate, got {other:?}"),
                }
                // Counterbore is a third of the placeholder length
                assert!(matches!(
                    children[1],
                    GeometryNode::Cylinder { height, .. } if approx_equal(height, 40.0)
                ));
            }
            other => panic!("expected Union, got {other:?}"),
        }
    }

    #[test]
    fn test_mounting_boss_metadata() {
        let shape = mounting_boss(false).unwrap();
        assert_eq!(shape.get("width"), Some(16.0));
        assert_eq!(shape.get("height"), Some(4.0));
        assert!(matches!(shape.node, GeometryNode::Difference { .. }));
    }

    #[test]
    fn test_mounting_boss_flat_side_shifts_to_origin() {
        let shape = mounting_boss(true).unwrap();
        match &shape.node {
            GeometryNode::Translate { offset, child } => {
                assert_eq!(*offset, [-8.0, 0.0, 0.0]);
                assert!(matches!(**child, GeometryNode::Difference { .. }));
            }
            other => panic!("expected Translate, got {other:?}"),
        }
    }

    #[test]
    fn test_nut_bracket_default_base_width() {
        let shape = nut_bracket(7.0, 4.0, 5.0, 2.0, &NutBracketParams::default()).unwrap();
        assert_eq!(shape.get("base_width"), Some(14.0));
    }

    #[test]
    fn test_nut_bracket_pocket_is_hexagonal() {
        let shape = nut_bracket(7.0, 4.0, 5.0, 2.0, &NutBracketParams::default()).unwrap();
        let void = match &shape.node {
            GeometryNode::Difference { children } => &children[1],
            other => panic!("expected Difference, got {other:?}"),
        };
        match void {
            GeometryNode::Union { children } => match &children[0] {
                GeometryNode::Translate { offset, child } => {
                    assert_eq!(offset[2], 2.0);
                    match &**child {
                        GeometryNode::Cylinder {
                            segments, radius1, ..
                        } => {
                            assert_eq!(*segments, HEX_SEGMENTS);
                            assert!(approx_equal(*radius1, nut_diam(7.0) / 2.0));
                        }
                        other => panic!("expected Cylinder, got {other:?}"),
                    }
                }
                other => panic!("expected Translate, got {other:?}"),
            },
            other => panic!("expected Union void, got {other:?}"),
        }
    }

    #[test]
    fn test_nut_bracket_flat_side_hulls_extension() {
        let params = NutBracketParams {
            flat_side: true,
            flat_side_dist: 3.0,
            ..Default::default()
        };
        let shape = nut_bracket(7.0, 4.0, 5.0, 2.0, &params).unwrap();
        match &shape.node {
            GeometryNode::Difference { children } => {
                assert!(matches!(children[0], GeometryNode::Hull { .. }));
            }
            other => panic!("expected Difference, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(screw_clearance_custom(0.0, 8.1, 100.0, 100.0).is_err());
        assert!(bolt_hole_template(4.7, -1.0).is_err());
        assert!(nut_bracket(-7.0, 4.0, 5.0, 2.0, &NutBracketParams::default()).is_err());
        assert!(nut_bracket(7.0, 4.0, 5.0, -0.1, &NutBracketParams::default()).is_err());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(screw_clearance("M4").unwrap(), screw_clearance("M4").unwrap());
        assert_eq!(mounting_boss(true).unwrap(), mounting_boss(true).unwrap());
        assert_eq!(
            nut_bracket(7.0, 4.0, 5.0, 2.0, &NutBracketParams::default()).unwrap(),
            nut_bracket(7.0, 4.0, 5.0, 2.0, &NutBracketParams::default()).unwrap()
        );
    }
}
