//! # Skill Graph Model
//!
//! Plain data for the skill network: nodes, edges, ratings and the graph
//! container that owns them. No I/O here.

pub mod node;
pub mod edge;
pub mod rating;
pub mod graph;

pub use node::{Position, Scores, SkillNode, INITIAL_SPREAD};
pub use edge::Edge;
pub use rating::{Rating, rating_value};
pub use graph::SkillGraph;
