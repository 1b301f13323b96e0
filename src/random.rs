//! Random number generator construction.
//!
//! Every run owns its generator; nothing here touches a process-wide
//! source, so independent optimizers never interfere with each other.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from operating system entropy.
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}
