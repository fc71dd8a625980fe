//! Deterministic particle starfield generation.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generates the background particle field: points placed uniformly inside
/// a cube centered on the origin. Deterministic for a given seed.
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
    extent: f32,
}

impl StarfieldGenerator {
    /// Create a generator. `extent` is the cube's edge length in world
    /// units (the scene default is 500).
    pub fn new(seed: u64, star_count: u32, extent: f32) -> Self {
        Self {
            seed,
            star_count,
            extent,
        }
    }

    /// Generate star positions as offsets from the field's center.
    pub fn generate(&self) -> Vec<Vec3> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut stars = Vec::with_capacity(self.star_count as usize);

        for _ in 0..self.star_count {
            stars.push(Vec3::new(
                (rng.random::<f32>() - 0.5) * self.extent,
                (rng.random::<f32>() - 0.5) * self.extent,
                (rng.random::<f32>() - 0.5) * self.extent,
            ));
        }

        stars
    }
}
