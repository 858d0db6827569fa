//! Skill node in the dependency network.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Rating;

/// Half-width of the cube initial positions are drawn from.
pub const INITIAL_SPREAD: f64 = 10.0;

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Uniform random position in `[-INITIAL_SPREAD, INITIAL_SPREAD]³`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let range = -INITIAL_SPREAD..=INITIAL_SPREAD;
        Self {
            x: rng.gen_range(range.clone()),
            y: rng.gen_range(range.clone()),
            z: rng.gen_range(range),
        }
    }

    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Numeric scores read from optional source columns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub req_score: f64,
    pub master_score: f64,
    pub req_indirect: f64,
    pub dep_indirect: f64,
}

/// A skill / knowledge area.
///
/// `req_direct` and `dep_direct` are zero until the loader has built the
/// full edge set and called [`super::SkillGraph::compute_degrees`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkillNode {
    pub name: String,
    pub familiarity: Rating,
    pub interest: Rating,
    pub market: Rating,
    pub scores: Scores,
    /// Number of edges where this node is the source (what it unlocks).
    pub req_direct: usize,
    /// Number of edges where this node is the target (its prerequisites).
    pub dep_direct: usize,
    pub position: Position,
}

impl SkillNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            familiarity: Rating::default(),
            interest: Rating::default(),
            market: Rating::default(),
            scores: Scores::default(),
            req_direct: 0,
            dep_direct: 0,
            position: Position::default(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_ratings(mut self, familiarity: &str, interest: &str, market: &str) -> Self {
        self.familiarity = Rating::parse(familiarity);
        self.interest = Rating::parse(interest);
        self.market = Rating::parse(market);
        self
    }

    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.scores = scores;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_positions_stay_in_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Position::random(&mut rng);
            for c in [p.x, p.y, p.z] {
                assert!((-INITIAL_SPREAD..=INITIAL_SPREAD).contains(&c));
            }
        }
    }

    #[test]
    fn same_seed_same_position() {
        let a = Position::random(&mut StdRng::seed_from_u64(42));
        let b = Position::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(1.0, 2.0, 2.0);
        assert!((a.distance(&b) - 3.0).abs() < 1e-12);
    }
}
