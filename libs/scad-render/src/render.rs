//! # Rendering
//!
//! Hands emitted OpenSCAD source to the resolved engine. The contract is
//! two explicit steps: attempt the 3D render; on a classified engine
//! failure, retry once with the tree wrapped in a thin linear extrusion so
//! plain 2D profiles become renderable. A second failure is surfaced.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use config::constants::EXTRUDE_FALLBACK_HEIGHT;
use csg_ir::builder::linear_extrude;
use csg_ir::GeometryNode;

use crate::emit::to_scad;
use crate::error::RenderError;
use crate::resolve::Engine;

/// Render a tree to `out` (STL or any format the engine infers from the
/// extension) through the resolved engine.
pub fn render_to_stl(
    engine: &Engine,
    node: &GeometryNode,
    out: &Path,
) -> Result<(), RenderError> {
    let exec = match engine {
        Engine::Resolved(path) => path,
        Engine::Unavailable => return Err(RenderError::EngineUnavailable),
    };

    match invoke(exec, node, out) {
        Err(RenderError::EngineFailure { .. }) => {
            log::warn!("3D render failed, retrying as an extruded 2D shape");
            let extruded = linear_extrude(EXTRUDE_FALLBACK_HEIGHT, node.clone());
            invoke(exec, &extruded, out)
        }
        other => other,
    }
}

fn invoke(exec: &Path, node: &GeometryNode, out: &Path) -> Result<(), RenderError> {
    let mut source = tempfile::Builder::new().suffix(".scad").tempfile()?;
    source.write_all(to_scad(node).as_bytes())?;

    let output = Command::new(exec)
        .arg("-o")
        .arg(out)
        .arg(source.path())
        .output()?;
    if output.status.success() {
        Ok(())
    } else {
        Err(RenderError::EngineFailure {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use csg_ir::builder::sphere;

    #[test]
    fn test_unavailable_engine_fails_without_io() {
        let result = render_to_stl(
            &Engine::Unavailable,
            &sphere(1.0, 20),
            Path::new("out.stl"),
        );
        assert!(matches!(result, Err(RenderError::EngineUnavailable)));
    }

    #[test]
    fn test_missing_executable_surfaces_io_error() {
        // A resolved-but-vanished executable is an I/O failure, not an
        // engine failure, so no 2D fallback is attempted.
        let engine = Engine::Resolved("definitely-not-a-csg-engine-a8f3".into());
        let dir = tempfile::tempdir().expect("tempdir");
        let result = render_to_stl(&engine, &sphere(1.0, 20), &dir.path().join("out.stl"));
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
