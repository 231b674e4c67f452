//! Random draw capability consumed by the splitter.
//!
//! The splitter never seeds or reseeds; reproducibility is owned by the
//! caller through the source it passes in.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Uniform draws the splitter needs.
///
/// `next_u64` is the only raw requirement. The derived draws have default
/// implementations so test doubles can pin axis choices and split offsets
/// directly.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform coin used for axis preference.
    fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }

    /// Uniform split offset in `[1, extent - 1]`. Only called with
    /// `extent >= 2`.
    fn offset_within(&mut self, extent: i32) -> i32 {
        debug_assert!(extent >= 2);
        1 + (self.next_u64() % (extent as u64 - 1)) as i32
    }
}

/// Production source backed by the workspace's deterministic generator.
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Derive an independent source for one map of a multi-map run, so a
    /// single run seed can drive many partitions without shared state.
    pub fn for_stream(run_seed: u64, stream: u64) -> Self {
        Self::from_seed(mix_seed_stream(run_seed, stream))
    }
}

impl RandomSource for SeededSource {
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

fn mix_seed_stream(run_seed: u64, stream: u64) -> u64 {
    let mut mixed = run_seed
        .wrapping_add(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(stream.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
