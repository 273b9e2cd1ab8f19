//! Seeded random sources.
//!
//! All randomness flows from one master stream per run. Each ant gets its
//! own sub-stream whose seed is drawn from the master in ant order, so the
//! outcome of an iteration does not depend on how ants are scheduled.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The random number generator used throughout the crate.
pub type AcoRng = ChaCha8Rng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> AcoRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draws one sub-stream seed per ant from the master stream.
///
/// Seeds are drawn in ant index order; ant `k` of an iteration always
/// receives the `k`-th value.
pub fn derive_ant_seeds<R: Rng>(master: &mut R, num_ants: usize) -> Vec<u64> {
    (0..num_ants).map(|_| master.random::<u64>()).collect()
}
