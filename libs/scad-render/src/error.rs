//! # Render Errors
//!
//! Error types for the engine bridge. Only [`RenderError::EngineFailure`]
//! triggers the 2D-extrusion fallback; everything else is surfaced as-is.

use thiserror::Error;

/// Errors that can occur while rendering through the external engine.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No engine executable was resolved; rendering is impossible but
    /// tree construction is unaffected.
    #[error("No CSG engine executable is available")]
    EngineUnavailable,

    /// Failed to write the source file or spawn the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine ran but rejected the tree.
    #[error("Engine exited with status {status:?}: {stderr}")]
    EngineFailure {
        /// Process exit code, if any.
        status: Option<i32>,
        /// Captured engine diagnostics.
        stderr: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================
