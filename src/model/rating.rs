//! Qualitative ratings and their 0..=5 numeric scale.
//!
//! Cells hold either a bare symbol (`🔥`) or a symbol followed by a label
//! (`🏆 Profissional`). Matching is two-tier: an exact match on the trimmed
//! text first, then a substring scan over the same tables in order.

use serde::{Deserialize, Serialize};

/// Familiarity scale. Labelled forms precede the bare symbol so the
/// substring scan credits the most specific entry first.
const FAMILIARITY_SCALE: &[(&str, u8)] = &[
    ("🏆 Profissional", 5),
    ("🏆", 5),
    ("💪 Confiante", 4),
    ("💪", 4),
    ("📚 Familiar", 3),
    ("📚", 3),
    ("🌱 Iniciante", 2),
    ("🌱", 2),
    ("❓ Desconhecida", 1),
    ("❓", 1),
];

/// Interest and market-relevance scale.
const INTEREST_SCALE: &[(&str, u8)] = &[
    ("⭐", 5),
    ("🔥", 4),
    ("👍", 3),
    ("😐", 2),
    ("🤷", 1),
];

/// A rating cell: original text plus its numeric value (0 = unrecognized).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub raw: String,
    pub value: u8,
}

impl Rating {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: rating_value(raw),
        }
    }
}

/// Map a rating cell to `0..=5`.
pub fn rating_value(raw: &str) -> u8 {
    let text = raw.trim();
    if text.is_empty() {
        return 0;
    }

    let tables = [FAMILIARITY_SCALE, INTEREST_SCALE];

    if let Some(&(_, v)) = tables.iter().flat_map(|t| t.iter()).find(|(k, _)| *k == text) {
        return v;
    }

    tables
        .iter()
        .flat_map(|t| t.iter())
        .find(|(k, _)| text.contains(k))
        .map_or(0, |&(_, v)| v)
}
