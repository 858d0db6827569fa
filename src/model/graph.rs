//! In-memory skill graph: ordered nodes, deduplicated edges.

use hashbrown::{HashMap, HashSet};

use super::{Edge, Position, SkillNode};

/// Nodes in first-seen order plus the edges between them.
///
/// Node names are unique; `upsert_node` replaces the attributes of an
/// existing name without moving it. Edges are unique by `(source, target)`.
#[derive(Debug, Clone, Default)]
pub struct SkillGraph {
    nodes: Vec<SkillNode>,
    edges: Vec<Edge>,
    /// name → index into `nodes`
    index: HashMap<String, usize>,
    edge_set: HashSet<(String, String)>,
}

impl SkillGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or overwrite the node with the same name in place.
    /// Returns `true` when an existing node was replaced.
    pub fn upsert_node(&mut self, node: SkillNode) -> bool {
        match self.index.get(&node.name) {
            Some(&i) => {
                self.nodes[i] = node;
                true
            }
            None => {
                self.index.insert(node.name.clone(), self.nodes.len());
                self.nodes.push(node);
                false
            }
        }
    }

    /// Add `source → target` unless an identical edge exists.
    ///
    /// Both endpoints must already be nodes; returns `false` (and stores
    /// nothing) for a duplicate or an unresolved endpoint.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        if !self.contains(source) || !self.contains(target) {
            return false;
        }
        let key = (source.to_string(), target.to_string());
        if !self.edge_set.insert(key) {
            return false;
        }
        self.edges.push(Edge::new(source, target));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edge_set
            .contains(&(source.to_string(), target.to_string()))
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn node(&self, name: &str) -> Option<&SkillNode> {
        self.index_of(name).map(|i| &self.nodes[i])
    }

    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recount `req_direct` / `dep_direct` for every node from the edge set.
    pub fn compute_degrees(&mut self) {
        for node in &mut self.nodes {
            node.req_direct = 0;
            node.dep_direct = 0;
        }
        for edge in &self.edges {
            if let Some(&s) = self.index.get(&edge.source) {
                self.nodes[s].req_direct += 1;
            }
            if let Some(&t) = self.index.get(&edge.target) {
                self.nodes[t].dep_direct += 1;
            }
        }
    }

    /// Copy of all positions in node order.
    pub fn positions(&self) -> Vec<Position> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    pub fn set_positions(&mut self, positions: &[Position]) {
        for (node, p) in self.nodes.iter_mut().zip(positions) {
            node.position = *p;
        }
    }

    /// Edges as `(source_index, target_index)` in edge order.
    /// Edges naming an unknown node are skipped.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        self.edges
            .iter()
            .filter_map(|e| Some((self.index_of(&e.source)?, self.index_of(&e.target)?)))
            .collect()
    }
}
