//! # Configuration Constants
//!
//! Centralized constants for the part feature library. All epsilon
//! dimensions, placeholder oversize factors, and tessellation defaults are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Fudge Dimensions**: Negligible sizes that keep boolean operations
//!   away from degenerate zero-volume inputs
//! - **Placeholder Dimensions**: Deliberately oversized lengths that
//!   guarantee a cut passes fully through any enclosing solid
//! - **Resolution**: Default segment counts for round shapes

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, both in metadata consistency checks and in tests.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// FUDGE DIMENSIONS
// =============================================================================

/// Epsilon dimension for near-degenerate hull anchors.
///
/// A hull over a full-size shape and a shape of this size blends the
/// full-size profile down to what is visually a point, without handing the
/// boolean engine an actual zero-volume operand.
pub const POINT_FUDGE: f64 = 1e-3;

/// Epsilon thickness for near-degenerate discs and seam overlaps.
///
/// Used both as the height of "infinitely thin" discs (a hull operand that
/// reads as a flat circle) and as the overlap that keeps two coincident
/// cylinder faces from producing a zero-thickness seam in a union.
pub const DISC_FUDGE: f64 = 1e-4;

// =============================================================================
// PLACEHOLDER DIMENSIONS
// =============================================================================

/// Oversize multiplier for through-cut placeholder lengths.
///
/// Subtraction tools (bolt holes, rod bores) are built this many times
/// longer than the nominal dimension so the cut is guaranteed to pass
/// through any enclosing solid; the excess is trimmed by the enclosing
/// boolean structure.
///
/// # Example
///
/// ```rust
/// use config::constants::THROUGH_FACTOR;
///
/// let head_diam = 8.1;
/// let placeholder_length = THROUGH_FACTOR * head_diam;
/// assert!(placeholder_length > 10.0 * 8.0);
/// ```
pub const THROUGH_FACTOR: f64 = 10.0;

/// Extrusion height for the 2D render fallback.
///
/// When a tree fails to render as a 3D solid, it is retried wrapped in a
/// linear extrusion of this height, which makes a 2D profile renderable
/// without visually changing it.
pub const EXTRUDE_FALLBACK_HEIGHT: f64 = 0.01;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default segment count for rounding spheres.
///
/// Rounding solids are small relative to the part, so a modest
/// tessellation is sufficient.
pub const SPHERE_SEGMENTS: u32 = 20;

/// Default segment count for full circles and cylinders.
pub const CIRCLE_SEGMENTS: u32 = 64;

/// Segment count that turns a circle into a hexagon.
///
/// A 6-segment circle of the right circumradius is exactly the hex-nut
/// profile used by the nut trap pocket.
pub const HEX_SEGMENTS: u32 = 6;

/// Minimum segment count for any circular shape.
///
/// A circle approximation needs at least 3 points to enclose area.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// HELPERS
// =============================================================================

/// Check whether two floating-point values are equal within [`EPSILON`].
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Check whether a floating-point value is zero within [`EPSILON`].
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
