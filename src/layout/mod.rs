//! # Spatial Layout
//!
//! Assigns 3D coordinates to a loaded [`SkillGraph`]. Only the force layout
//! computes anything; the other kinds are accepted by configuration and
//! keep the loader's random initial positions.

pub mod force;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::SkillGraph;
pub use force::{force_directed, ForceParams};

/// Layout algorithm name, as written to the output metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Force,
    Sphere,
    Hierarchical,
}

impl LayoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Force => "force",
            LayoutKind::Sphere => "sphere",
            LayoutKind::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout settings (`[layout]` table of the config file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub kind: LayoutKind,
    pub iterations: usize,
    pub spring_length: f64,
    pub repulsion_strength: f64,
    /// Seed for the initial random positions; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        let force = ForceParams::default();
        Self {
            kind: LayoutKind::Force,
            iterations: force.iterations,
            spring_length: force.spring_length,
            repulsion_strength: force.repulsion_strength,
            seed: None,
        }
    }
}

impl LayoutParams {
    pub fn force_params(&self) -> ForceParams {
        ForceParams {
            iterations: self.iterations,
            spring_length: self.spring_length,
            repulsion_strength: self.repulsion_strength,
        }
    }
}

/// Move every node of `graph` according to `params`.
///
/// Node identities, order and edges are untouched; only positions change.
pub fn apply_layout(graph: &mut SkillGraph, params: &LayoutParams) {
    match params.kind {
        LayoutKind::Force => {
            let mut positions = graph.positions();
            let edges = graph.edge_indices();
            force_directed(&mut positions, &edges, &params.force_params());
            graph.set_positions(&positions);
            info!(
                nodes = graph.node_count(),
                edges = edges.len(),
                iterations = params.iterations,
                "force layout done"
            );
        }
        kind => warn!(%kind, "layout kind has no solver, keeping initial positions"),
    }
}
