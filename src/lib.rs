//! # skillnet — Skill Dependency Network in 3D
//!
//! Reads a spreadsheet export of skills and their prerequisites, builds a
//! directed "unlocks" graph, lays it out in 3D with a force simulation and
//! writes a JSON document plus OBJ geometry for viewers and importers.
//!
//! ## Design Principles
//!
//! 1. **Lenient ingest**: only a missing input file is fatal; every bad cell
//!    degrades to a default and is logged
//! 2. **Pure parsing**: header matching and relation splitting are plain
//!    functions over strings
//! 3. **Index-addressed layout**: the simulation works on a contiguous
//!    position array, never on names
//! 4. **Stable output contract**: `NetworkDocument` field names are what
//!    importers read
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skillnet::{NetworkConfig, LayoutParams};
//!
//! # fn example() -> skillnet::Result<()> {
//! let config = NetworkConfig {
//!     layout: LayoutParams { seed: Some(7), ..LayoutParams::default() },
//!     ..NetworkConfig::default()
//! };
//! let summary = skillnet::run(&config)?;
//! println!("{} nodes, {} edges", summary.nodes, summary.edges);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Load | `ingest` | `SkillGraph` with random positions and degrees |
//! | Layout | `layout` | positions relaxed in place |
//! | Export | `export` | JSON document, OBJ geometry |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod ingest;
pub mod layout;
pub mod export;
pub mod config;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Edge, Position, Rating, Scores, SkillGraph, SkillNode};
pub use ingest::{load, load_from_reader, load_with_rng, LoadReport};
pub use layout::{apply_layout, LayoutKind, LayoutParams};
pub use export::{export_json, export_obj, NetworkDocument};
pub use config::NetworkConfig;

// ============================================================================
// Batch run
// ============================================================================

/// Counts from a completed [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub nodes: usize,
    pub edges: usize,
    pub unresolved_relations: usize,
    pub report: LoadReport,
}

/// Load, lay out and export according to `config`.
///
/// Nothing is written if loading fails.
pub fn run(config: &NetworkConfig) -> Result<RunSummary> {
    config.validate()?;

    let mut rng = match config.layout.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (mut graph, report) = load_with_rng(&config.input, &mut rng)?;

    apply_layout(&mut graph, &config.layout);

    export::write_json(&graph, &config.layout, &config.json_output)?;
    export::write_obj(&graph, &config.obj_output)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "run complete"
    );

    Ok(RunSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        unresolved_relations: report.unresolved.len(),
        report,
    })
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
