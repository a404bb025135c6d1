//! # SCAD Render Crate
//!
//! The external-collaborator bridge: turns a [`csg_ir::GeometryNode`] tree
//! into OpenSCAD source and hands it to a resolved OpenSCAD executable.
//!
//! The core generators never require the engine; everything here is
//! optional plumbing layered on top. Engine discovery is an explicit
//! one-shot resolution step ([`resolve::resolve_engine`]) returning either
//! a resolved executable or an explicit unavailable state; there is no
//! ambient process-wide probing.
//!
//! Rendering follows a two-step contract: attempt the 3D render, and on a
//! classified engine failure retry once with the tree wrapped in a thin
//! linear extrusion (which makes plain 2D profiles renderable). If both
//! attempts fail, the final error is surfaced.

pub mod emit;
pub mod error;
pub mod render;
pub mod resolve;

pub use emit::to_scad;
pub use error::RenderError;
pub use render::render_to_stl;
pub use resolve::{resolve_engine, resolve_engine_from, Engine};
