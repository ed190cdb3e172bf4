//! Seeded random stream for schedule rebuilds

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reseedable random stream derived from a 64-bit world seed.
///
/// A rebuild resets the stream once and then draws everything (both
/// shuffles and every slot draw) from it in a fixed order.
#[derive(Debug, Clone)]
pub struct SeedSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeedSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Rewind the stream to its constructor seed
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SeedSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
