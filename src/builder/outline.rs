//! Re-expresses node-based Glyphs paths as point-pen drawing calls.

use crate::glyphs::{Node, NodeType, Path};
use crate::pen::PointPen;
use crate::ufo::glyph::PointType;

/// Draws Glyphs `paths` onto `pen`.
///
/// A path with no nodes produces no drawing calls at all. Open paths are
/// emitted in stored order, with the first node relabeled as a move
/// whatever its stored type. Glyphs stores the starting node of a closed
/// path at the end of the node list, so closed paths are rotated to begin
/// at the last on-curve node before emission; their node types are
/// preserved as-is.
pub fn draw_paths(pen: &mut impl PointPen, paths: &[Path]) {
    for path in paths {
        if path.nodes.is_empty() {
            continue;
        }
        pen.begin_path();
        if !path.closed {
            if let Some((first, rest)) = path.nodes.split_first() {
                pen.add_point(first.x, first.y, Some(PointType::Move), first.smooth);
                for node in rest {
                    add_node(pen, node);
                }
            }
        } else {
            let start =
                path.nodes.iter().rposition(|node| node.node_type != NodeType::OffCurve).unwrap_or(0);
            for node in path.nodes[start..].iter().chain(&path.nodes[..start]) {
                add_node(pen, node);
            }
        }
        pen.end_path();
    }
}

fn add_node(pen: &mut impl PointPen, node: &Node) {
    let typ = match node.node_type {
        NodeType::Line => Some(PointType::Line),
        NodeType::Curve => Some(PointType::Curve),
        NodeType::QCurve => Some(PointType::QCurve),
        NodeType::OffCurve => None,
    };
    pen.add_point(node.x, node.y, typ, node.smooth);
}
