//! # Config Crate
//!
//! Centralized configuration constants for the part feature library.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, POINT_FUDGE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use POINT_FUDGE for degeneracy-avoiding shape dimensions
//! assert!(POINT_FUDGE > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Epsilon shapes render cleanly in OpenSCAD
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
