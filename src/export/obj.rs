//! Wavefront OBJ export — nodes as vertices, edges as line elements.
//!
//! ```text
//! # Career Skills Network
//! # 3 nodes, 2 edges
//!
//! v 1.000000 -2.500000 0.125000
//! ...
//!
//! l 1 2
//! ```
//!
//! Vertex indices are 1-based and follow node order.

use std::io::Write;

use hashbrown::HashMap;

use crate::model::SkillGraph;
use crate::Result;

pub const OBJ_TITLE: &str = "Career Skills Network";

/// Export a graph as OBJ geometry. Edges whose endpoints are not both
/// nodes are left out.
pub fn export_obj(graph: &SkillGraph, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "# {}", OBJ_TITLE)?;
    writeln!(writer, "# {} nodes, {} edges", graph.node_count(), graph.edge_count())?;
    writeln!(writer)?;

    for node in graph.nodes() {
        let p = node.position;
        writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }

    writeln!(writer)?;

    let vertex: HashMap<&str, usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, n)| (n.name.as_str(), i + 1))
        .collect();

    for edge in graph.edges() {
        if let (Some(s), Some(t)) = (
            vertex.get(edge.source.as_str()),
            vertex.get(edge.target.as_str()),
        ) {
            writeln!(writer, "l {} {}", s, t)?;
        }
    }

    Ok(())
}
