//! # CSG IR Crate
//!
//! The geometry tree every feature generator produces and consumes.
//!
//! A [`GeometryNode`] is one node of a constructive-solid-geometry tree:
//! either a primitive shape with concrete numeric parameters, or an
//! operator (boolean, hull, transform) applied to child nodes. Trees are
//! immutable once built; composition wraps existing trees in new operator
//! nodes and never mutates a subtree.
//!
//! An [`AnnotatedShape`] pairs a tree with analytically derived metadata
//! (heights, radii, widths) so dependent features can be positioned
//! without re-deriving trigonometric relationships.
//!
//! ## Usage
//!
//! ```rust
//! use csg_ir::builder::{cylinder_d, difference, up};
//!
//! let boss = cylinder_d(4.0, 16.0, false, 64);
//! let bore = up(2.0, cylinder_d(40.0, 4.7, false, 64));
//! let part = difference(boss, bore);
//! assert_eq!(part.child_count(), 2);
//! ```

pub mod builder;
pub mod centerize;
pub mod node;
pub mod shape;

pub use centerize::{centerize, cube, square, Center};
pub use node::GeometryNode;
pub use shape::AnnotatedShape;
