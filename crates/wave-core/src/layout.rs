//! Deterministic golden-angle point layout.
//!
//! Points are spread quasi-evenly over a sphere with a Fibonacci spiral, and
//! each point gets a stable pseudo-random seed in \[0, 1) derived from its
//! index and a global seed. Identical inputs always produce bit-identical
//! output; there is no hidden state.

use glam::Vec3;

const PHI: f32 = 1.618_034;
pub const GOLDEN_ANGLE: f32 = (2.0 - PHI) * std::f32::consts::TAU;

/// Immutable per-(count, radius, seed) base geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLayout {
    pub positions: Vec<Vec3>,
    pub seeds: Vec<f32>,
}

impl PointLayout {
    /// Generate `count` positions on a sphere of the given radius.
    ///
    /// Invalid inputs are coerced rather than rejected: the count is floored
    /// to 1 and a non-finite or non-positive radius becomes 1.0.
    pub fn generate(count: u32, radius: f32, seed: u32) -> Self {
        let count = count.max(1);
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            1.0
        };

        let mut positions = Vec::with_capacity(count as usize);
        let mut seeds = Vec::with_capacity(count as usize);
        for i in 0..count {
            let t = i as f32 + 0.5;
            let y = 1.0 - 2.0 * t / count as f32;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = GOLDEN_ANGLE * t;
            positions.push(Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius);
            seeds.push(point_seed(seed, i));
        }
        Self { positions, seeds }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Per-point seed: mix index into the global seed, run one LCG round and
/// normalize the 32-bit result to \[0, 1).
pub fn point_seed(seed: u32, index: u32) -> f32 {
    let mixed = seed ^ (index.wrapping_add(1)).wrapping_mul(2_654_435_761);
    let h = mixed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    // keep the top 24 bits so the quotient stays strictly below 1.0 in f32
    (h >> 8) as f32 / 16_777_216.0
}
