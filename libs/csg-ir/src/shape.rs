//! # Annotated Shape
//!
//! The externally visible result of every feature generator: a geometry
//! tree paired with derived numeric metadata.
//!
//! Metadata is computed analytically from the input parameters that built
//! the tree (never measured from the tree itself) and exists so a calling
//! generator can position or size a dependent feature without re-deriving
//! trigonometric relationships. The geometry engine never consumes it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::GeometryNode;

// =============================================================================
// ANNOTATED SHAPE
// =============================================================================

/// A geometry tree plus derived metadata.
///
/// The map is keyed by conventional names (`total_height`, `rad`, `width`,
/// `base_width`, ...); a `BTreeMap` keeps ordering, equality and serialized
/// form deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedShape {
    /// Root geometry node.
    pub node: GeometryNode,
    metadata: BTreeMap<String, f64>,
}

impl AnnotatedShape {
    /// Create an annotated shape with no metadata.
    pub fn new(node: GeometryNode) -> Self {
        Self {
            node,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach one metadata entry, builder-style.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Look up a metadata entry.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).copied()
    }

    /// All metadata entries.
    pub fn metadata(&self) -> &BTreeMap<String, f64> {
        &self.metadata
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::sphere;

    #[test]
    fn test_metadata_round_trip() {
        let shape = AnnotatedShape::new(sphere(1.0, 20))
            .with("rad", 1.0)
            .with("total_height", 2.2);
        assert_eq!(shape.get("rad"), Some(1.0));
        assert_eq!(shape.get("total_height"), Some(2.2));
        assert_eq!(shape.get("width"), None);
    }

    #[test]
    fn test_equality_includes_metadata() {
        let a = AnnotatedShape::new(sphere(1.0, 20)).with("rad", 1.0);
        let b = AnnotatedShape::new(sphere(1.0, 20)).with("rad", 1.0);
        let c = AnnotatedShape::new(sphere(1.0, 20)).with("rad", 2.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
