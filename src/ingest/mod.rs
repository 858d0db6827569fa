//! # Tabular Ingestion
//!
//! CSV → [`SkillGraph`](crate::model::SkillGraph). Header matching,
//! relation-cell splitting and column detection are pure functions; only
//! the loader touches the filesystem.

pub mod normalize;
pub mod relations;
pub mod columns;
pub mod loader;

pub use columns::{ColumnMap, Concept};
pub use loader::{
    load, load_from_reader, load_with_rng, LoadReport, RelationKind, UnresolvedRelation,
};
pub use normalize::normalize_key;
pub use relations::parse_relations;
