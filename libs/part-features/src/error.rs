//! # Feature Errors
//!
//! Error types for the feature generators. All errors are synchronous and
//! local to the failing call; nothing is retried inside this crate.

use thiserror::Error;

/// Errors that can occur while generating a feature.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// A named fastener size is not in the clearance table.
    /// Never defaulted; always surfaced.
    #[error("Unknown part size: {0}")]
    UnknownPartSize(String),

    /// A dimension parameter is non-positive.
    #[error("Invalid parameter {name}: {value} (must be positive)")]
    InvalidParameter {
        /// Parameter name as it appears in the generator signature.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A polygon segment count below 3 cannot enclose area.
    #[error("Invalid segment count: {0} (must be at least 3)")]
    InvalidSegmentCount(u32),

    /// A sector or arc angle outside (0, 360] degrees.
    #[error("Invalid angle: {0} (must be in (0, 360] degrees)")]
    InvalidAngle(f64),
}

/// Check that a dimension parameter is positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), FeatureError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(FeatureError::InvalidParameter { name, value })
    }
}

// =============================================================================
// TESTS
// =============================================================================
