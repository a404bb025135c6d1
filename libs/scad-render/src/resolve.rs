//! # Engine Resolution
//!
//! Explicit one-shot discovery of the OpenSCAD executable. Callers resolve
//! once at startup and pass the result around; an unavailable engine is an
//! explicit state, not a panic or an ambient global.

use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Candidate executables probed by [`resolve_engine`], in order.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "openscad",
    "openscad-nightly",
    r"C:\Program Files\OpenSCAD\openscad.exe",
];

/// Outcome of engine resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    /// A working executable was found.
    Resolved(PathBuf),
    /// No candidate responded; rendering and export are unavailable.
    Unavailable,
}

impl Engine {
    /// Whether rendering is possible.
    pub fn is_available(&self) -> bool {
        matches!(self, Engine::Resolved(_))
    }
}

/// Probe the default candidate executables.
pub fn resolve_engine() -> Engine {
    resolve_engine_from(DEFAULT_CANDIDATES)
}

/// Probe the given candidates in order by running `--version`; the first
/// one that responds wins.
pub fn resolve_engine_from(candidates: &[&str]) -> Engine {
    for candidate in candidates {
        let probe = Command::new(candidate)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if let Ok(status) = probe {
            if status.success() {
                log::debug!("resolved CSG engine: {candidate}");
                return Engine::Resolved(PathBuf::from(candidate));
            }
        }
    }
    log::warn!("no CSG engine executable found; preview and STL rendering will fail");
    Engine::Unavailable
}

// =============================================================================
// TESTS
// =============================================================================
