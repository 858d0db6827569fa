//! Force-directed relaxation in 3D.
//!
//! Each iteration runs two passes over index-addressed positions:
//!
//! ```text
//! repulsion:  for i in nodes:  p[i] += 0.01 * Σ_j≠i  û(p[i]-p[j]) * k / dist²
//! spring:     for (s,t) in edges:  f = 0.1 * (dist - L)
//!                                  p[s] += û(p[t]-p[s]) * f
//!                                  p[t] -= û(p[t]-p[s]) * f
//! ```
//!
//! `dist` is the Euclidean distance plus [`DISTANCE_FLOOR`]. Repulsion
//! updates land immediately, so node `i` already sees the moved positions
//! of nodes `0..i`. There is no convergence test; the iteration count is
//! the only stopping rule.

use tracing::trace;

use crate::model::Position;

/// Added to every distance so coincident points never divide by zero.
pub const DISTANCE_FLOOR: f64 = 0.1;
/// Scale applied to the summed repulsion before it moves a node.
pub const REPULSION_STEP: f64 = 0.01;
/// Linear spring constant.
pub const SPRING_STIFFNESS: f64 = 0.1;

/// Tunables for [`force_directed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    pub iterations: usize,
    pub spring_length: f64,
    pub repulsion_strength: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            spring_length: 3.0,
            repulsion_strength: 50.0,
        }
    }
}

/// Run the simulation in place. `edges` index into `positions`; pairs
/// outside the slice are ignored.
pub fn force_directed(positions: &mut [Position], edges: &[(usize, usize)], params: &ForceParams) {
    let n = positions.len();
    let springs: Vec<(usize, usize)> = edges
        .iter()
        .copied()
        .filter(|&(s, t)| s < n && t < n)
        .collect();

    for iteration in 0..params.iterations {
        repulsion_pass(positions, params.repulsion_strength);
        spring_pass(positions, &springs, params.spring_length);
        trace!(iteration, "layout iteration done");
    }
}

/// One O(n²) repulsion sweep.
pub fn repulsion_pass(positions: &mut [Position], strength: f64) {
    for i in 0..positions.len() {
        let p = positions[i];
        let (mut fx, mut fy, mut fz) = (0.0, 0.0, 0.0);

        for (j, q) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let dx = p.x - q.x;
            let dy = p.y - q.y;
            let dz = p.z - q.z;
            let dist = (dx * dx + dy * dy + dz * dz).sqrt() + DISTANCE_FLOOR;
            let force = strength / (dist * dist);
            fx += dx / dist * force;
            fy += dy / dist * force;
            fz += dz / dist * force;
        }

        let p = &mut positions[i];
        p.x += fx * REPULSION_STEP;
        p.y += fy * REPULSION_STEP;
        p.z += fz * REPULSION_STEP;
    }
}

/// One sweep over the edges, in edge order.
pub fn spring_pass(positions: &mut [Position], edges: &[(usize, usize)], spring_length: f64) {
    for &(s, t) in edges {
        let (src, tgt) = (positions[s], positions[t]);
        let dx = tgt.x - src.x;
        let dy = tgt.y - src.y;
        let dz = tgt.z - src.z;
        let dist = (dx * dx + dy * dy + dz * dz).sqrt() + DISTANCE_FLOOR;
        let force = (dist - spring_length) * SPRING_STIFFNESS;

        let fx = dx / dist * force;
        let fy = dy / dist * force;
        let fz = dz / dist * force;

        positions[s].x += fx;
        positions[s].y += fy;
        positions[s].z += fz;
        positions[t].x -= fx;
        positions[t].y -= fy;
        positions[t].z -= fz;
    }
}
