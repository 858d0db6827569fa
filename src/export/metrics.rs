//! Presentation metrics derived from the final degree counts.
//!
//! Never read back by the loader or the layout; they exist so downstream
//! tools can map topology onto size, color or emission without
//! recomputing it.

use serde::{Deserialize, Serialize};

use crate::model::{SkillGraph, SkillNode};

/// Weight of outgoing edges in [`NodeMetrics::connection_influence`].
pub const REQUIRED_BY_WEIGHT: f64 = 0.7;
/// Weight of incoming edges in [`NodeMetrics::connection_influence`].
pub const DEPENDS_ON_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeMetrics {
    /// `req_direct * dep_direct`: high for bridge skills.
    pub network_centrality: usize,
    /// `req_direct / (1 + dep_direct)`: unlocks per prerequisite.
    pub foundation_efficiency: f64,
    pub total_connections: usize,
    /// Weighted degree normalized by the largest `req_direct` in the graph.
    pub connection_influence: f64,
}

impl NodeMetrics {
    pub fn for_node(node: &SkillNode, max_req_direct: usize) -> Self {
        let req = node.req_direct as f64;
        let dep = node.dep_direct as f64;
        Self {
            network_centrality: node.req_direct * node.dep_direct,
            foundation_efficiency: req / (1.0 + dep),
            total_connections: node.req_direct + node.dep_direct,
            connection_influence: (req * REQUIRED_BY_WEIGHT + dep * DEPENDS_ON_WEIGHT)
                / max_req_direct.max(1) as f64,
        }
    }
}

/// Largest `req_direct` over nodes that have one, or 0.
pub fn max_req_direct(graph: &SkillGraph) -> usize {
    graph
        .nodes()
        .iter()
        .map(|n| n.req_direct)
        .filter(|&r| r > 0)
        .max()
        .unwrap_or(0)
}

/// Metrics for every node, in node order.
pub fn compute_metrics(graph: &SkillGraph) -> Vec<NodeMetrics> {
    let max_req = max_req_direct(graph);
    graph
        .nodes()
        .iter()
        .map(|n| NodeMetrics::for_node(n, max_req))
        .collect()
}
