//! # Part Features Crate
//!
//! Composable generators for mechanical part features: rounding/pointing
//! blends, angular sectors and arcs, fastener clearance voids and nut
//! traps, regular polygons, and keyed rod slots.
//!
//! Every generator is a pure function from numeric parameters to an
//! [`csg_ir::AnnotatedShape`]: a CSG tree plus analytically derived
//! metadata (`total_height`, `rad`, `width`, ...). Generators compose by
//! wrapping a returned tree in further boolean or transform nodes; nothing
//! is ever mutated in place.
//!
//! Parameters are validated up front (dimensions positive, polygon segment
//! counts at least 3); a failing call returns a [`FeatureError`] and never
//! a partially built shape.
//!
//! ## Usage
//!
//! ```rust
//! use part_features::rounding::pointed_sphere;
//!
//! let blend = pointed_sphere(0.5, 1.2).unwrap();
//! assert_eq!(blend.get("total_height"), Some(0.5 + 0.5 * 1.2));
//! ```

pub mod angular;
pub mod error;
pub mod fastener;
pub mod polygon;
pub mod rod_slot;
pub mod rounding;

pub use error::FeatureError;
