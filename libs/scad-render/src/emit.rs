//! # OpenSCAD Emission
//!
//! Serializes a geometry tree to OpenSCAD source, the wire format the
//! external engine consumes. Formatting is deterministic (two-space
//! indentation, one node per statement), so emitted source doubles as a
//! structural oracle in tests.

use csg_ir::GeometryNode;

/// Serialize a tree to OpenSCAD source, terminated by a newline.
pub fn to_scad(node: &GeometryNode) -> String {
    let mut out = String::new();
    emit_node(node, 0, &mut out);
    out
}

fn indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn vec2(v: &[f64; 2]) -> String {
    format!("[{}, {}]", v[0], v[1])
}

fn vec3(v: &[f64; 3]) -> String {
    format!("[{}, {}, {}]", v[0], v[1], v[2])
}

fn emit_block(header: &str, children: &[GeometryNode], level: usize, out: &mut String) {
    indent(level, out);
    out.push_str(header);
    out.push_str(" {\n");
    for child in children {
        emit_node(child, level + 1, out);
    }
    indent(level, out);
    out.push_str("}\n");
}

fn emit_node(node: &GeometryNode, level: usize, out: &mut String) {
    match node {
        GeometryNode::Cube { size, center } => {
            indent(level, out);
            out.push_str(&format!("cube(size = {}, center = {});\n", vec3(size), center));
        }
        GeometryNode::Sphere { radius, segments } => {
            indent(level, out);
            out.push_str(&format!("sphere(r = {radius}, $fn = {segments});\n"));
        }
        GeometryNode::Cylinder {
            height,
            radius1,
            radius2,
            center,
            segments,
        } => {
            indent(level, out);
            out.push_str(&format!(
                "cylinder(h = {height}, r1 = {radius1}, r2 = {radius2}, center = {center}, $fn = {segments});\n"
            ));
        }
        GeometryNode::Square { size, center } => {
            indent(level, out);
            out.push_str(&format!(
                "square(size = {}, center = {});\n",
                vec2(size),
                center
            ));
        }
        GeometryNode::Circle { radius, segments } => {
            indent(level, out);
            out.push_str(&format!("circle(r = {radius}, $fn = {segments});\n"));
        }
        GeometryNode::Union { children } => emit_block("union()", children, level, out),
        GeometryNode::Difference { children } => emit_block("difference()", children, level, out),
        GeometryNode::Intersection { children } => {
            emit_block("intersection()", children, level, out)
        }
        GeometryNode::Hull { children } => emit_block("hull()", children, level, out),
        GeometryNode::Translate { offset, child } => {
            emit_block(
                &format!("translate({})", vec3(offset)),
                std::slice::from_ref(&**child),
                level,
                out,
            );
        }
        GeometryNode::Rotate { angles, child } => {
            emit_block(
                &format!("rotate({})", vec3(angles)),
                std::slice::from_ref(&**child),
                level,
                out,
            );
        }
        GeometryNode::Mirror { normal, child } => {
            emit_block(
                &format!("mirror({})", vec3(normal)),
                std::slice::from_ref(&**child),
                level,
                out,
            );
        }
        GeometryNode::Scale { factors, child } => {
            emit_block(
                &format!("scale({})", vec3(factors)),
                std::slice::from_ref(&**child),
                level,
                out,
            );
        }
        GeometryNode::LinearExtrude { height, child } => {
            emit_block(
                &format!("linear_extrude(height = {height})"),
                std::slice::from_ref(&**child),
                level,
                out,
            );
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
