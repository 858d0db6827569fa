//! Structured JSON document: nodes, edges, run metadata.
//!
//! This document is the only contract toward importers. Field names are
//! stable: importers read `nodes[].{name,x,y,z,req_direct,dep_direct,...}`
//! and `edges[].{source,target}`.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::metrics::{compute_metrics, NodeMetrics};
use crate::layout::LayoutParams;
use crate::model::{Edge, SkillGraph, SkillNode};
use crate::Result;

/// One node as written to the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    pub familiarity: String,
    pub familiarity_num: u8,
    pub interest: String,
    pub interest_num: u8,
    pub market: String,
    pub market_num: u8,
    pub req_score: f64,
    pub master_score: f64,
    pub req_indirect: f64,
    pub dep_indirect: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub req_direct: usize,
    pub dep_direct: usize,
    #[serde(flatten)]
    pub metrics: NodeMetrics,
}

impl NodeRecord {
    pub fn new(node: &SkillNode, metrics: NodeMetrics) -> Self {
        Self {
            name: node.name.clone(),
            familiarity: node.familiarity.raw.clone(),
            familiarity_num: node.familiarity.value,
            interest: node.interest.raw.clone(),
            interest_num: node.interest.value,
            market: node.market.raw.clone(),
            market_num: node.market.value,
            req_score: node.scores.req_score,
            master_score: node.scores.master_score,
            req_indirect: node.scores.req_indirect,
            dep_indirect: node.scores.dep_indirect,
            x: node.position.x,
            y: node.position.y,
            z: node.position.z,
            req_direct: node.req_direct,
            dep_direct: node.dep_direct,
            metrics,
        }
    }
}

/// Run parameters and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub layout: String,
    pub iterations: usize,
    pub spring_length: f64,
    pub repulsion_strength: f64,
    pub total_nodes: usize,
    pub total_edges: usize,
}

impl Metadata {
    pub fn new(graph: &SkillGraph, params: &LayoutParams) -> Self {
        Self {
            layout: params.kind.to_string(),
            iterations: params.iterations,
            spring_length: params.spring_length,
            repulsion_strength: params.repulsion_strength,
            total_nodes: graph.node_count(),
            total_edges: graph.edge_count(),
        }
    }
}

/// The whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<Edge>,
    pub metadata: Metadata,
}

impl NetworkDocument {
    /// Snapshot a laid-out graph. Pure: the same graph gives the same
    /// document.
    pub fn build(graph: &SkillGraph, params: &LayoutParams) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .zip(compute_metrics(graph))
            .map(|(node, metrics)| NodeRecord::new(node, metrics))
            .collect();
        Self {
            nodes,
            edges: graph.edges().to_vec(),
            metadata: Metadata::new(graph, params),
        }
    }
}

/// Write the document as pretty-printed JSON (two-space indent, UTF-8 kept
/// as-is).
pub fn export_json(
    graph: &SkillGraph,
    params: &LayoutParams,
    writer: &mut dyn Write,
) -> Result<()> {
    let doc = NetworkDocument::build(graph, params);
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}
