//! # Export
//!
//! Serialize a laid-out [`SkillGraph`](crate::model::SkillGraph) for
//! downstream viewers:
//!
//! ```text
//! SkillGraph ──► export_json() ──► network_3d.json  (nodes + metrics, edges, metadata)
//!            └─► export_obj()  ──► network_3d.obj   (v / l records)
//! ```

pub mod metrics;
pub mod json;
pub mod obj;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::layout::LayoutParams;
use crate::model::SkillGraph;
use crate::Result;

pub use json::{export_json, Metadata, NetworkDocument, NodeRecord};
pub use metrics::{compute_metrics, NodeMetrics};
pub use obj::export_obj;

/// Write the JSON document to `path`.
pub fn write_json(graph: &SkillGraph, params: &LayoutParams, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    export_json(graph, params, &mut out)?;
    out.flush()?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "wrote JSON document"
    );
    Ok(())
}

/// Write the OBJ geometry to `path`.
pub fn write_obj(graph: &SkillGraph, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    export_obj(graph, &mut out)?;
    out.flush()?;
    info!(path = %path.display(), "wrote OBJ geometry");
    Ok(())
}
